use distance::{AirportTable, DistanceCalculator};

use super::flight_details::normalize_code;

/// What the console shows for a `distance` command.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceReport {
    pub origin: String,
    pub destination: String,
    pub distance_miles: Option<f64>,
}

impl DistanceReport {
    /// Looks up both codes after trimming and uppercasing them.
    pub fn new(calculator: &DistanceCalculator, origin: &str, destination: &str) -> Self {
        let origin = normalize_code(origin);
        let destination = normalize_code(destination);
        let distance_miles = calculator.distance_miles(&origin, &destination);

        DistanceReport {
            origin,
            destination,
            distance_miles,
        }
    }

    pub fn is_available(&self) -> bool {
        self.distance_miles.is_some()
    }

    /// The line printed to the user.
    pub fn message(&self) -> String {
        match self.distance_miles {
            Some(distance) => format!("Distance: {:.1} miles", distance),
            None => format!(
                "Distance not available for {}→{}.",
                self.origin, self.destination
            ),
        }
    }
}

/// Rows of the `airports` command: every known airport, or only the requested codes that
/// have coordinates.
pub fn airport_listing(table: &AirportTable, requested: &[&str]) -> Vec<String> {
    let codes = if requested.is_empty() {
        table.selectable_codes(table.known_codes())
    } else {
        table.selectable_codes(requested.iter().map(|code| normalize_code(code)))
    };

    codes
        .iter()
        .filter_map(|code| table.lookup(code))
        .map(|airport| {
            format!(
                "{}  {:>9.4}  {:>10.4}",
                airport.code, airport.latitude, airport.longitude
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use distance::AirportCoordinate;

    fn table() -> AirportTable {
        AirportTable::from_entries(vec![
            AirportCoordinate::new("JFK", 40.6413, -73.7781),
            AirportCoordinate::new("LAX", 33.9416, -118.4085),
            AirportCoordinate::new("ORD", 41.9742, -87.9073),
        ])
        .unwrap()
    }

    #[test]
    fn test_known_pair_message() {
        let table = table();
        let calculator = DistanceCalculator::new(&table);
        let report = DistanceReport::new(&calculator, "JFK", "LAX");

        assert!(report.is_available());
        assert_eq!(report.message(), "Distance: 2469.6 miles");
    }

    #[test]
    fn test_unknown_origin_message() {
        let table = table();
        let calculator = DistanceCalculator::new(&table);
        let report = DistanceReport::new(&calculator, "ZZZ", "LAX");

        assert!(!report.is_available());
        assert_eq!(report.message(), "Distance not available for ZZZ→LAX.");
    }

    #[test]
    fn test_unknown_destination_message() {
        let table = table();
        let calculator = DistanceCalculator::new(&table);
        let report = DistanceReport::new(&calculator, "JFK", "zzz");

        assert!(!report.is_available());
        assert_eq!(report.message(), "Distance not available for JFK→ZZZ.");
    }

    #[test]
    fn test_codes_are_trimmed_and_uppercased() {
        let table = table();
        let calculator = DistanceCalculator::new(&table);
        let report = DistanceReport::new(&calculator, " jfk", "lax  ");

        assert_eq!(report.origin, "JFK");
        assert_eq!(report.destination, "LAX");
        assert_eq!(report.message(), "Distance: 2469.6 miles");
    }

    #[test]
    fn test_listing_all_airports_in_code_order() {
        let rows = airport_listing(&table(), &[]);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("JFK"));
        assert!(rows[1].starts_with("LAX"));
        assert!(rows[2].starts_with("ORD"));
    }

    #[test]
    fn test_listing_requested_codes_skips_unknown() {
        let rows = airport_listing(&table(), &["ord", "ZZZ", "JFK", "ORD"]);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("JFK"));
        assert!(rows[1].starts_with("ORD"));
        assert!(rows[1].contains("41.9742"));
    }
}
