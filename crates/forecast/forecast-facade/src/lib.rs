//! Forecast Facade
//!
//! High-level API for weekly demand forecasting. Re-exports all public types
//! from the forecast stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use data_spi::WeeklySeries;
//!
//! let series = WeeklySeries::from_values("Food Demand", &[500.0, 520.0, 540.0]);
//! match forecast_facade::forecast(&series) {
//!     Ok(result) => assert_eq!(result.len(), 15),
//!     Err(e) => panic!("{}", e),
//! }
//! ```

// Re-export everything from API (which includes SPI)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{confidence, decomposition, forecaster, seasonality};

// Re-export implementations at root
pub use forecast_core::{
    AdditiveDecomposer, AdditiveForecaster, AdditiveModel, AutocorrelationDetector,
    ForecastWithConfidence, StandardErrorComputer,
};

use data_spi::WeeklySeries;

/// Forecast a series with the default configuration (12 weeks, 80% interval).
pub fn forecast(series: &WeeklySeries) -> Result<ForecastResult> {
    AdditiveForecaster::default().forecast(series)
}

/// Forecast a series with an explicit configuration.
pub fn forecast_with(series: &WeeklySeries, config: ForecastConfig) -> Result<ForecastResult> {
    AdditiveForecaster::new(config).forecast(series)
}
