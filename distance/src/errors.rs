use std::fmt::{self, Display};

/// Enum representing the possible errors that can occur while building an `AirportTable`
/// from an external source.
///
/// The possible errors are:
///
/// - `Io`: the source could not be opened or read.
/// - `Csv`: a row could not be parsed into `code,latitude,longitude`.
/// - `InvalidCode`: the code is not three uppercase ASCII letters.
/// - `LatitudeOutOfRange`: the latitude is not a finite value in [-90, 90].
/// - `LongitudeOutOfRange`: the longitude is not a finite value in [-180, 180].
/// - `DuplicateCode`: the same code appears more than once.
///
/// Unknown codes at lookup time are not errors; they are reported as `None`.
#[derive(Debug, PartialEq)]
pub enum TableError {
    Io(String),
    Csv(String),
    InvalidCode(String),
    LatitudeOutOfRange { code: String, latitude: f64 },
    LongitudeOutOfRange { code: String, longitude: f64 },
    DuplicateCode(String),
}

impl Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(msg) => write!(f, "[Io]: Could not read the airport table: {}", msg),
            TableError::Csv(msg) => write!(f, "[Csv]: Malformed airport row: {}", msg),
            TableError::InvalidCode(code) => {
                write!(f, "[InvalidCode]: '{}' is not a valid IATA code", code)
            }
            TableError::LatitudeOutOfRange { code, latitude } => write!(
                f,
                "[LatitudeOutOfRange]: {} has latitude {} outside [-90, 90]",
                code, latitude
            ),
            TableError::LongitudeOutOfRange { code, longitude } => write!(
                f,
                "[LongitudeOutOfRange]: {} has longitude {} outside [-180, 180]",
                code, longitude
            ),
            TableError::DuplicateCode(code) => {
                write!(f, "[DuplicateCode]: {} appears more than once", code)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io(err.to_string())
    }
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(_) => TableError::Io(err.to_string()),
            _ => TableError::Csv(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_code() {
        let err = TableError::LatitudeOutOfRange {
            code: "JFK".to_string(),
            latitude: 91.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("JFK"));
        assert!(msg.contains("91"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TableError = io_err.into();
        assert!(matches!(err, TableError::Io(_)));
    }
}
