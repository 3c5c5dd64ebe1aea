//! Decomposition result model

use serde::{Deserialize, Serialize};

/// Result of time series decomposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    /// Trend component
    pub trend: Vec<f64>,
    /// Seasonal component
    pub seasonal: Vec<f64>,
    /// Residual component
    pub residual: Vec<f64>,
}

impl DecompositionResult {
    /// Trend plus seasonal, i.e. the fitted value at each observation.
    pub fn fitted(&self) -> Vec<f64> {
        self.trend
            .iter()
            .zip(&self.seasonal)
            .map(|(t, s)| t + s)
            .collect()
    }
}
