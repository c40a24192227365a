//! Airport coordinates and great-circle distances between airports.
//!
//! The embedded table is built on first use and shared by every caller for the rest of
//! the process. Unknown codes are never errors: lookups and distances return `None`.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

pub mod airport;
pub mod calculator;
mod data;
pub mod errors;
pub mod haversine;
pub mod table;

pub use airport::AirportCoordinate;
pub use calculator::DistanceCalculator;
pub use errors::TableError;
pub use haversine::{haversine_miles, EARTH_RADIUS_MILES};
pub use table::AirportTable;

static AIRPORTS: Lazy<AirportTable> = Lazy::new(AirportTable::embedded);

/// The embedded airport table.
pub fn airports() -> &'static AirportTable {
    &AIRPORTS
}

/// Looks up `code` in the embedded table.
pub fn lookup(code: &str) -> Option<&'static AirportCoordinate> {
    AIRPORTS.lookup(code)
}

/// Codes of the embedded table.
pub fn known_codes() -> BTreeSet<&'static str> {
    AIRPORTS.known_codes()
}

/// Distance in miles between two airports of the embedded table, or `None` if either
/// code is unknown.
pub fn distance_miles(origin: &str, destination: &str) -> Option<f64> {
    DistanceCalculator::new(&AIRPORTS).distance_miles(origin, destination)
}
