use std::fmt;

use distance::TableError;
use logger::LoggerError;

/// Represents errors that can occur in the flight details console.
///
/// Input errors are reported back to the user and the console keeps running; `Config`,
/// `Table` and `Logger` only happen at startup.
#[derive(Debug)]
pub enum FormError {
    InvalidInput(String),
    InvalidDate(String),             // Date not in DD-MM-YYYY
    InvalidTime(String),             // Time not in HH:MM
    ElapsedTimeOutOfRange(String),   // Scheduled elapsed time outside 0..=1000
    InvalidCarrier(String),          // Carrier code with the wrong shape
    UnknownAirport(String),          // No coordinates for this code
    Config(String),                  // Bad command-line arguments or environment
    Table(TableError),               // The airport table could not be loaded
    Logger(LoggerError),             // The log file could not be opened or written
    Io(std::io::Error),              // Reading from stdin failed
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::InvalidInput(ref input) => write!(f, "Invalid input: {}", input),
            FormError::InvalidDate(ref date) => {
                write!(f, "Invalid date '{}'. Expected DD-MM-YYYY.", date)
            }
            FormError::InvalidTime(ref time) => {
                write!(f, "Invalid departure time '{}'. Expected HH:MM.", time)
            }
            FormError::ElapsedTimeOutOfRange(ref minutes) => write!(
                f,
                "Scheduled elapsed time '{}' must be a whole number of minutes between 0 and 1000.",
                minutes
            ),
            FormError::InvalidCarrier(ref carrier) => {
                write!(f, "Invalid airline code '{}'.", carrier)
            }
            FormError::UnknownAirport(ref code) => {
                write!(f, "No coordinates are known for airport '{}'.", code)
            }
            FormError::Config(msg) => write!(f, "Configuration error: {}", msg),
            FormError::Table(e) => write!(f, "Airport table error: {}", e),
            FormError::Logger(e) => write!(f, "Logger error: {}", e),
            FormError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Table(e) => Some(e),
            FormError::Logger(e) => Some(e),
            FormError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TableError> for FormError {
    fn from(err: TableError) -> Self {
        FormError::Table(err)
    }
}

impl From<LoggerError> for FormError {
    fn from(err: LoggerError) -> Self {
        FormError::Logger(err)
    }
}

impl From<std::io::Error> for FormError {
    fn from(err: std::io::Error) -> Self {
        FormError::Io(err)
    }
}
