//! Confidence interval implementations
//!
//! Provides residual-based intervals for fitted and forecast values.

use forecast_spi::{ConfidenceInterval, ConfidenceIntervalComputer};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// Forecast with confidence intervals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastWithConfidence {
    /// Point forecast
    pub forecast: Vec<f64>,
    /// Lower bound of confidence interval
    pub lower: Vec<f64>,
    /// Upper bound of confidence interval
    pub upper: Vec<f64>,
    /// Confidence level (e.g., 0.80 for 80%)
    pub confidence_level: f64,
}

impl From<ConfidenceInterval> for ForecastWithConfidence {
    fn from(ci: ConfidenceInterval) -> Self {
        Self {
            forecast: ci.forecast,
            lower: ci.lower,
            upper: ci.upper,
            confidence_level: ci.confidence_level,
        }
    }
}

impl From<ForecastWithConfidence> for ConfidenceInterval {
    fn from(f: ForecastWithConfidence) -> Self {
        Self {
            forecast: f.forecast,
            lower: f.lower,
            upper: f.upper,
            confidence_level: f.confidence_level,
        }
    }
}

impl ForecastWithConfidence {
    /// Create from point forecast and standard errors
    pub fn from_standard_errors(
        forecast: Vec<f64>,
        std_errors: &[f64],
        confidence_level: f64,
    ) -> Self {
        let z = z_score(confidence_level);

        let lower = forecast
            .iter()
            .zip(std_errors.iter())
            .map(|(&f, &se)| f - z * se)
            .collect();

        let upper = forecast
            .iter()
            .zip(std_errors.iter())
            .map(|(&f, &se)| f + z * se)
            .collect();

        Self {
            forecast,
            lower,
            upper,
            confidence_level,
        }
    }

    /// Create intervals from in-sample residuals.
    ///
    /// The first `history_len` estimates get the residual standard
    /// deviation; forecast step `h` gets it scaled by `sqrt(1 + h / n)`.
    pub fn from_residuals(
        estimates: Vec<f64>,
        residuals: &[f64],
        history_len: usize,
        confidence_level: f64,
    ) -> Self {
        let sigma = residual_std(residuals);
        let n = history_len.max(1) as f64;

        let std_errors: Vec<f64> = (0..estimates.len())
            .map(|i| {
                if i < history_len {
                    sigma
                } else {
                    let h = (i + 1 - history_len) as f64;
                    sigma * (1.0 + h / n).sqrt()
                }
            })
            .collect();

        Self::from_standard_errors(estimates, &std_errors, confidence_level)
    }
}

/// Population standard deviation of residuals, 0 when empty.
pub fn residual_std(residuals: &[f64]) -> f64 {
    if residuals.is_empty() {
        return 0.0;
    }
    let n = residuals.len() as f64;
    let mean = residuals.iter().sum::<f64>() / n;
    let variance = residuals.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Standard error-based confidence interval computer
pub struct StandardErrorComputer;

impl StandardErrorComputer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StandardErrorComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfidenceIntervalComputer for StandardErrorComputer {
    fn compute(
        &self,
        estimates: &[f64],
        residuals: &[f64],
        history_len: usize,
        confidence_level: f64,
    ) -> ConfidenceInterval {
        ForecastWithConfidence::from_residuals(
            estimates.to_vec(),
            residuals,
            history_len,
            confidence_level,
        )
        .into()
    }
}

/// Two-sided z-score for a confidence level in (0, 1).
///
/// Levels outside that range yield NaN, which callers reject as invalid
/// bounds.
pub fn z_score(confidence_level: f64) -> f64 {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return f64::NAN;
    }
    Normal::new(0.0, 1.0)
        .map(|normal| normal.inverse_cdf(0.5 + confidence_level / 2.0))
        .unwrap_or(f64::NAN)
}
