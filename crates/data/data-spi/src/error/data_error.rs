//! Dataset error types.

use thiserror::Error;

/// Dataset errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// Underlying reader failed
    #[error("Read failed: {0}")]
    ReadFailed(String),

    /// Failed to parse a record or field
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A required column is absent from the table header
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// Region names must be unique within a snapshot
    #[error("Duplicate region '{0}'")]
    DuplicateRegion(String),

    /// Requested demand metric is not present
    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),

    /// Week indices must start at 1 and increase by exactly one
    #[error("Invalid week sequence: expected week {expected}, found {found}")]
    InvalidWeek { expected: u32, found: u32 },

    /// Demand values must be finite
    #[error("Non-finite value at week {week}")]
    NonFinite { week: u32 },

    /// Demand values must be non-negative
    #[error("Negative value {value} at week {week}")]
    NegativeValue { week: u32, value: f64 },

    /// A column sum does not fit in an i64
    #[error("Total of '{column}' overflows")]
    TotalOverflow { column: String },

    /// No data returned
    #[error("No data returned")]
    NoData,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;
