use serde::Deserialize;

use crate::haversine::haversine_miles;

/// Represents an airport identified by its IATA code and its geographical position.
///
/// `latitude` and `longitude` are in decimal degrees.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AirportCoordinate {
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl AirportCoordinate {
    pub fn new(code: &str, latitude: f64, longitude: f64) -> Self {
        AirportCoordinate {
            code: code.to_string(),
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other`, in miles.
    pub fn distance_miles_to(&self, other: &AirportCoordinate) -> f64 {
        haversine_miles(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Returns true if `code` has the shape of an IATA airport code: three uppercase ASCII letters.
pub fn is_iata_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}
