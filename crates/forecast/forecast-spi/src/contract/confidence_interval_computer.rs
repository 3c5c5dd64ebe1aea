//! Trait for confidence interval computation

use crate::model::ConfidenceInterval;

/// Trait for confidence interval computation
pub trait ConfidenceIntervalComputer: Send + Sync {
    /// Compute intervals around `estimates`.
    ///
    /// The first `history_len` estimates are in-sample fits; the rest are
    /// forecasts at horizons 1, 2, ...
    fn compute(
        &self,
        estimates: &[f64],
        residuals: &[f64],
        history_len: usize,
        confidence_level: f64,
    ) -> ConfidenceInterval;
}
