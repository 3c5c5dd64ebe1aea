//! Forecast error types

use data_spi::DataError;
use thiserror::Error;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Series values or weeks unusable for fitting
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Fit produced non-finite parameters
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Invalid period for seasonality
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}

impl From<DataError> for ForecastError {
    fn from(err: DataError) -> Self {
        ForecastError::InvalidData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_insufficient_data_error_message() {
        let error = ForecastError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 2 points, got 1"
        );
    }

    #[test]
    fn test_invalid_parameter_error_message() {
        let error = ForecastError::InvalidParameter {
            name: "interval_width".to_string(),
            reason: "must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'interval_width': must be between 0 and 1"
        );
    }

    #[test]
    fn test_numerical_error_message() {
        let error = ForecastError::NumericalError("slope is NaN".to_string());
        assert_eq!(error.to_string(), "Numerical error: slope is NaN");
    }

    #[test]
    fn test_invalid_period_error_message() {
        let error = ForecastError::InvalidPeriod("period must be at least 2".to_string());
        assert_eq!(error.to_string(), "Invalid period: period must be at least 2");
    }

    #[test]
    fn test_from_data_error() {
        let error: ForecastError = DataError::NonFinite { week: 4 }.into();
        assert_eq!(
            error,
            ForecastError::InvalidData("Non-finite value at week 4".to_string())
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(ForecastError::InvalidData("x".to_string()));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_all_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();
    }
}
