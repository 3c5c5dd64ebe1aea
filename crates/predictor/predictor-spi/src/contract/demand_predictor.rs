//! Trait for weekly demand predictors

use crate::error::Result;
use crate::model::PredictionResult;
use data_spi::WeeklySeries;

/// Trains on `(week, value)` pairs and predicts the weeks that follow.
///
/// Every call trains a fresh model, so implementations hold only
/// configuration and can be shared across threads.
pub trait DemandPredictor: Send + Sync {
    /// Predict `horizon()` weeks immediately after the last training week.
    fn predict(&self, series: &WeeklySeries) -> Result<PredictionResult>;

    /// Number of weeks predicted.
    fn horizon(&self) -> usize;
}
