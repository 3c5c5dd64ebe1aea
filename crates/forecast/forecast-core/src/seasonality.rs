//! Seasonality detection implementations
//!
//! Provides autocorrelation-based seasonality detection.

use forecast_spi::SeasonalityDetector;

/// Autocorrelation-based seasonality detector
pub struct AutocorrelationDetector {
    /// Minimum autocorrelation threshold to consider significant
    threshold: f64,
}

impl AutocorrelationDetector {
    pub fn new() -> Self {
        Self { threshold: 0.3 }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for AutocorrelationDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SeasonalityDetector for AutocorrelationDetector {
    fn detect(&self, data: &[f64], max_period: usize) -> Option<usize> {
        detect_seasonality_with_threshold(data, max_period, self.threshold)
    }
}

/// Detect seasonality period using autocorrelation with default threshold
pub fn detect_seasonality(data: &[f64], max_period: usize) -> Option<usize> {
    detect_seasonality_with_threshold(data, max_period, 0.3)
}

/// Detect seasonality period using autocorrelation with custom threshold.
///
/// The series is first differenced once so that a steady trend does not
/// show up as strong correlation at every lag.
pub fn detect_seasonality_with_threshold(
    data: &[f64],
    max_period: usize,
    threshold: f64,
) -> Option<usize> {
    let diffed: Vec<f64> = data.windows(2).map(|w| w[1] - w[0]).collect();
    if diffed.len() < 4 {
        return None;
    }

    let acf = autocorrelation(&diffed, max_period.min(diffed.len() / 2));

    let mut best_period = 0;
    let mut best_acf = threshold;
    for (lag, &value) in acf.iter().enumerate().skip(2) {
        if value > best_acf {
            best_acf = value;
            best_period = lag;
        }
    }

    // The seasonal fit needs two full periods of the original data.
    if best_period > 0 && data.len() >= best_period * 2 {
        Some(best_period)
    } else {
        None
    }
}

/// Compute autocorrelation function for a time series
pub fn autocorrelation(data: &[f64], max_lag: usize) -> Vec<f64> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }
    let mean: f64 = data.iter().sum::<f64>() / n as f64;
    let var: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();

    if var == 0.0 {
        return vec![0.0; max_lag.min(n - 1) + 1];
    }

    (0..=max_lag.min(n - 1))
        .map(|lag| {
            if lag == 0 {
                1.0
            } else {
                data.iter()
                    .take(n - lag)
                    .zip(data.iter().skip(lag))
                    .map(|(a, b)| (a - mean) * (b - mean))
                    .sum::<f64>()
                    / var
            }
        })
        .collect()
}
