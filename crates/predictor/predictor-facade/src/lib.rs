//! Predictor Facade
//!
//! High-level API for weekly demand prediction. Re-exports all public types
//! from the predictor stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use data_spi::WeeklySeries;
//!
//! let series = WeeklySeries::from_values("Medical Demand", &[100.0, 105.0, 110.0, 120.0]);
//! let result = predictor_facade::predict(&series).unwrap();
//! assert_eq!(result.points[0].week, 5);
//! ```

// Re-export everything from API (which includes SPI)
pub use predictor_api::*;

// Explicit re-exports for documentation
pub use predictor_api::prelude;

// Re-export core modules for direct access
pub use predictor_core::{forest, metrics, predictor, tree};

// Re-export implementations at root
pub use predictor_core::{ForestDemandPredictor, RandomForestRegressor, RegressionTree};

use data_spi::WeeklySeries;

/// Predict the next 10 weeks with the default configuration (seed 42).
pub fn predict(series: &WeeklySeries) -> Result<PredictionResult> {
    ForestDemandPredictor::default().predict(series)
}

/// Predict with an explicit configuration.
pub fn predict_with(series: &WeeklySeries, config: PredictorConfig) -> Result<PredictionResult> {
    ForestDemandPredictor::new(config).predict(series)
}
