//! Error types for nomination graph construction and export.

use std::fmt;
use std::io;

/// Error type for reading, building, and exporting nomination networks
#[derive(Debug)]
pub enum NominationError {
    /// Required columns absent from the input header; holds every missing name
    Schema { missing: Vec<String> },
    Csv(csv::Error),
    Io(io::Error),
}

impl fmt::Display for NominationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NominationError::Schema { missing } => {
                write!(f, "CSV missing columns: {}", missing.join(", "))
            }
            NominationError::Csv(err) => write!(f, "CSV error: {}", err),
            NominationError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for NominationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NominationError::Schema { .. } => None,
            NominationError::Csv(err) => Some(err),
            NominationError::Io(err) => Some(err),
        }
    }
}

impl From<csv::Error> for NominationError {
    fn from(err: csv::Error) -> Self {
        NominationError::Csv(err)
    }
}

impl From<io::Error> for NominationError {
    fn from(err: io::Error) -> Self {
        NominationError::Io(err)
    }
}
