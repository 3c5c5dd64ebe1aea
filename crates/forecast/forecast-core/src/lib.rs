//! Forecast Core
//!
//! Core implementations for additive decomposition, seasonality detection,
//! confidence intervals and the weekly demand forecaster.

pub mod confidence;
pub mod decomposition;
pub mod forecaster;
pub mod seasonality;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    ConfidenceInterval, ConfidenceIntervalComputer, DecompositionResult, Decomposer,
    DemandForecaster, ForecastError, ForecastPoint, ForecastResult, Result, SeasonalityDetector,
};

// Re-export API configuration
pub use forecast_api::{ForecastConfig, SeasonalityMode};

// Re-export main types
pub use confidence::{ForecastWithConfidence, StandardErrorComputer};
pub use decomposition::{AdditiveDecomposer, AdditiveModel};
pub use forecaster::AdditiveForecaster;
pub use seasonality::AutocorrelationDetector;
