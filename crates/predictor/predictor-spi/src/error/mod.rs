//! Error module containing error types and result aliases

mod prediction_error;

pub use prediction_error::PredictionError;

/// Result type for prediction operations
pub type Result<T> = std::result::Result<T, PredictionError>;
