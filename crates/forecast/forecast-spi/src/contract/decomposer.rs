//! Trait for time series decomposition

use crate::error::Result;
use crate::model::DecompositionResult;

/// Trait for time series decomposition
pub trait Decomposer: Send + Sync {
    /// Decompose a series into trend, seasonal and residual components.
    ///
    /// A `period` of 0, or one the data cannot cover twice, yields a zero
    /// seasonal component.
    fn decompose(&self, data: &[f64], period: usize) -> Result<DecompositionResult>;
}
