//! Prediction error types

use data_spi::DataError;
use thiserror::Error;

/// Errors that can occur during training or prediction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// Insufficient samples for training
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Training samples unusable
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Model produced non-finite output
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

impl From<DataError> for PredictionError {
    fn from(err: DataError) -> Self {
        PredictionError::InvalidData(err.to_string())
    }
}
