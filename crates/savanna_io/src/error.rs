//! Error types for savanna_io operations.

use thiserror::Error;

/// Main error type for configuration-record operations.
#[derive(Error, Debug)]
pub enum RecordError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// The record did not carry the expected number of fields.
    #[error("Malformed record: expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A field failed to parse as an integer.
    #[error("Malformed record: field {field:?} is not an integer: {value:?}")]
    Parse { field: &'static str, value: String },
}

/// Result type alias for savanna_io operations.
pub type Result<T> = std::result::Result<T, RecordError>;
