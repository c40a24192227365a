use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::airport::{is_iata_code, AirportCoordinate};
use crate::data::AIRPORT_COORDS;
use crate::errors::TableError;

/// Fixed set of airports keyed by IATA code.
///
/// A table is validated as a whole when it is built and never changes afterwards, so a
/// shared reference can be handed to any number of readers.
#[derive(Clone, Debug, Default)]
pub struct AirportTable {
    airports: BTreeMap<String, AirportCoordinate>,
}

impl AirportTable {
    /// Builds the table compiled into this crate.
    pub fn embedded() -> Self {
        let airports = AIRPORT_COORDS
            .iter()
            .map(|&(code, latitude, longitude)| {
                (
                    code.to_string(),
                    AirportCoordinate::new(code, latitude, longitude),
                )
            })
            .collect();

        AirportTable { airports }
    }

    /// Builds a table from a list of coordinates.
    ///
    /// # Errors
    /// - `TableError::InvalidCode` - If a code is not three uppercase ASCII letters.
    /// - `TableError::LatitudeOutOfRange` - If a latitude is not finite or outside [-90, 90].
    /// - `TableError::LongitudeOutOfRange` - If a longitude is not finite or outside [-180, 180].
    /// - `TableError::DuplicateCode` - If a code appears twice.
    pub fn from_entries<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = AirportCoordinate>,
    {
        let mut airports = BTreeMap::new();
        for airport in entries {
            validate(&airport)?;
            if airports.contains_key(&airport.code) {
                return Err(TableError::DuplicateCode(airport.code));
            }
            airports.insert(airport.code.clone(), airport);
        }

        Ok(AirportTable { airports })
    }

    /// Reads a table from CSV data with a `code,latitude,longitude` header.
    ///
    /// Surrounding whitespace in fields is ignored. Any malformed or invalid row fails the
    /// whole load.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for record in csv_reader.deserialize::<AirportCoordinate>() {
            entries.push(record?);
        }

        Self::from_entries(entries)
    }

    /// Reads a table from a CSV file. See [`AirportTable::from_csv_reader`].
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| TableError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_csv_reader(file)
    }

    /// Returns the coordinate stored under `code`, or `None` if the code is not in the table.
    ///
    /// The match is exact: codes are stored in uppercase and `"jfk"` is not `"JFK"`.
    pub fn lookup(&self, code: &str) -> Option<&AirportCoordinate> {
        self.airports.get(code)
    }

    /// Every code in the table.
    pub fn known_codes(&self) -> BTreeSet<&str> {
        self.airports.keys().map(String::as_str).collect()
    }

    /// Sorted, de-duplicated subset of `candidates` that has known coordinates.
    ///
    /// Used to restrict what a user can pick to the codes a distance can be computed for.
    pub fn selectable_codes<I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .filter_map(|code| {
                let code: &str = AsRef::<str>::as_ref(&code);
                self.airports.contains_key(code).then(|| code.to_string())
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Airports in code order.
    pub fn iter(&self) -> impl Iterator<Item = &AirportCoordinate> {
        self.airports.values()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

fn validate(airport: &AirportCoordinate) -> Result<(), TableError> {
    if !is_iata_code(&airport.code) {
        return Err(TableError::InvalidCode(airport.code.clone()));
    }
    if !airport.latitude.is_finite() || !(-90.0..=90.0).contains(&airport.latitude) {
        return Err(TableError::LatitudeOutOfRange {
            code: airport.code.clone(),
            latitude: airport.latitude,
        });
    }
    if !airport.longitude.is_finite() || !(-180.0..=180.0).contains(&airport.longitude) {
        return Err(TableError::LongitudeOutOfRange {
            code: airport.code.clone(),
            longitude: airport.longitude,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AirportTable {
        AirportTable::from_entries(vec![
            AirportCoordinate::new("JFK", 40.6413, -73.7781),
            AirportCoordinate::new("LAX", 33.9416, -118.4085),
            AirportCoordinate::new("ORD", 41.9742, -87.9073),
        ])
        .unwrap()
    }

    #[test]
    fn test_embedded_table_passes_validation() {
        let embedded = AirportTable::embedded();
        let rebuilt = AirportTable::from_entries(embedded.iter().cloned()).unwrap();
        assert_eq!(rebuilt.len(), embedded.len());
        assert_eq!(embedded.len(), AIRPORT_COORDS.len());
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let table = sample();
        let jfk = table.lookup("JFK").unwrap();
        assert_eq!(jfk.latitude, 40.6413);
        assert_eq!(jfk.longitude, -73.7781);
        assert!(table.lookup("ZZZ").is_none());
        assert!(table.lookup("").is_none());
        assert!(table.lookup("jfk").is_none());
    }

    #[test]
    fn test_known_codes() {
        let table = sample();
        let codes = table.known_codes();
        assert_eq!(codes.into_iter().collect::<Vec<_>>(), vec!["JFK", "LAX", "ORD"]);
    }

    #[test]
    fn test_selectable_codes_intersects_sorts_and_dedups() {
        let table = sample();
        let selectable = table.selectable_codes(["ORD", "XXX", "JFK", "ORD", "SEA"]);
        assert_eq!(selectable, vec!["JFK".to_string(), "ORD".to_string()]);
    }

    #[test]
    fn test_rejects_duplicate_code() {
        let result = AirportTable::from_entries(vec![
            AirportCoordinate::new("JFK", 40.6413, -73.7781),
            AirportCoordinate::new("JFK", 40.0, -73.0),
        ]);
        assert_eq!(result.unwrap_err(), TableError::DuplicateCode("JFK".to_string()));
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let lat = AirportTable::from_entries(vec![AirportCoordinate::new("AAA", 90.5, 0.0)]);
        assert!(matches!(lat, Err(TableError::LatitudeOutOfRange { .. })));

        let lon = AirportTable::from_entries(vec![AirportCoordinate::new("AAA", 0.0, -180.1)]);
        assert!(matches!(lon, Err(TableError::LongitudeOutOfRange { .. })));

        let nan = AirportTable::from_entries(vec![AirportCoordinate::new("AAA", f64::NAN, 0.0)]);
        assert!(matches!(nan, Err(TableError::LatitudeOutOfRange { .. })));
    }

    #[test]
    fn test_boundary_coordinates_are_accepted() {
        let table = AirportTable::from_entries(vec![
            AirportCoordinate::new("NPL", 90.0, 180.0),
            AirportCoordinate::new("SPL", -90.0, -180.0),
        ]);
        assert_eq!(table.unwrap().len(), 2);
    }

    #[test]
    fn test_rejects_malformed_code() {
        let result = AirportTable::from_entries(vec![AirportCoordinate::new("jfk", 0.0, 0.0)]);
        assert_eq!(result.unwrap_err(), TableError::InvalidCode("jfk".to_string()));
    }

    #[test]
    fn test_from_csv_reader() {
        let data = "code,latitude,longitude\nJFK, 40.6413, -73.7781\nLAX,33.9416,-118.4085\n";
        let table = AirportTable::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("JFK").unwrap().longitude, -73.7781);
    }

    #[test]
    fn test_from_csv_reader_empty_body() {
        let table = AirportTable::from_csv_reader("code,latitude,longitude\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_csv_reader_malformed_row() {
        let data = "code,latitude,longitude\nJFK,north,-73.7781\n";
        let result = AirportTable::from_csv_reader(data.as_bytes());
        assert!(matches!(result, Err(TableError::Csv(_))));
    }

    #[test]
    fn test_from_csv_reader_invalid_row_fails_whole_load() {
        let data = "code,latitude,longitude\nJFK,40.6413,-73.7781\nBAD,123.0,0.0\n";
        let result = AirportTable::from_csv_reader(data.as_bytes());
        assert!(matches!(result, Err(TableError::LatitudeOutOfRange { .. })));
    }

    #[test]
    fn test_from_csv_path_missing_file() {
        let result = AirportTable::from_csv_path("/nonexistent/airports.csv");
        assert!(matches!(result, Err(TableError::Io(_))));
    }
}
