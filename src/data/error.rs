//! Dataset error types
//!
//! Defines all errors that can occur while assembling or exporting the tables.

use thiserror::Error;

/// Errors that can occur in the data layer
#[derive(Error, Debug)]
pub enum DataError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Two match rows share a tournament year
    #[error("Duplicate tournament year: {0}")]
    DuplicateYear(u16),

    /// Two standings share an ISO code
    #[error("Duplicate ISO code: {0}")]
    DuplicateIso(String),

    /// ISO code is not three ASCII uppercase letters
    #[error("Invalid ISO code: {0}")]
    InvalidIso(String),

    /// Unknown export table name
    #[error("Unknown table: {0}")]
    UnknownTable(String),
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Serialization(err.to_string())
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
