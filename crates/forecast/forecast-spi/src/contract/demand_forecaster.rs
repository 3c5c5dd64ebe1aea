//! Trait for weekly demand forecasters

use crate::error::Result;
use crate::model::ForecastResult;
use data_spi::WeeklySeries;

/// Fits a model to one weekly demand series and projects it forward.
///
/// Implementations are stateless between calls: every call fits a fresh
/// model, so a single instance can be shared across threads.
pub trait DemandForecaster: Send + Sync {
    /// Forecast the series, returning one row per historical week followed
    /// by one row per forecast week.
    fn forecast(&self, series: &WeeklySeries) -> Result<ForecastResult>;

    /// Number of weeks projected past the last observation.
    fn horizon(&self) -> usize;
}
