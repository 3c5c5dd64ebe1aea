//! Forecast Service Provider Interface
//!
//! Defines traits for demand forecasting, decomposition, seasonality
//! detection and interval estimation.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{
    ConfidenceIntervalComputer, Decomposer, DemandForecaster, SeasonalityDetector,
};
pub use error::{ForecastError, Result};
pub use model::{ConfidenceInterval, DecompositionResult, ForecastPoint, ForecastResult};
