//! Trait for single-feature regression models

use crate::error::Result;

/// Common trait for regressors mapping one feature to one target
pub trait Regressor {
    /// Fit the model to paired samples
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()>;

    /// Predict the target for each feature value
    fn predict(&self, x: &[f64]) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
