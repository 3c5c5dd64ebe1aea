//! Additive time series decomposition
//!
//! Fits `y = trend + seasonal + residual` where the trend is an ordinary
//! least squares line over the week index and the seasonal component is the
//! centred per-position mean of the detrended series.

use forecast_spi::{DecompositionResult, Decomposer, ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Fitted additive model that can be evaluated at any week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditiveModel {
    /// Trend value at week 0
    intercept: f64,
    /// Trend change per week
    slope: f64,
    /// Seasonal period in weeks, 0 when no seasonal component was fitted
    period: usize,
    /// Seasonal offset per position, `period` entries
    profile: Vec<f64>,
    /// Number of observations used in fitting
    n_observations: usize,
}

impl AdditiveModel {
    /// Fit the model to `values` observed at weeks 1, 2, ..., n.
    ///
    /// Seasonality is only fitted when `period >= 2` and the data covers at
    /// least two full periods; otherwise the model is trend only.
    pub fn fit(values: &[f64], period: usize) -> Result<Self> {
        let n = values.len();
        if n < 2 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: n,
            });
        }

        let weeks: Vec<f64> = (1..=n).map(|w| w as f64).collect();
        let mean_t = weeks.iter().sum::<f64>() / n as f64;
        let mean_y = values.iter().sum::<f64>() / n as f64;

        let sxx: f64 = weeks.iter().map(|t| (t - mean_t).powi(2)).sum();
        let sxy: f64 = weeks
            .iter()
            .zip(values)
            .map(|(t, y)| (t - mean_t) * (y - mean_y))
            .sum();

        if sxx.abs() < 1e-12 {
            return Err(ForecastError::NumericalError(
                "Singular design in trend regression".to_string(),
            ));
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_t;

        let seasonal_period = if period >= 2 && n >= period * 2 {
            period
        } else {
            0
        };
        let profile = if seasonal_period > 0 {
            seasonal_profile(values, intercept, slope, seasonal_period)
        } else {
            Vec::new()
        };

        let model = Self {
            intercept,
            slope,
            period: seasonal_period,
            profile,
            n_observations: n,
        };

        if !model.is_finite() {
            return Err(ForecastError::NumericalError(
                "Additive fit produced non-finite parameters".to_string(),
            ));
        }

        Ok(model)
    }

    fn is_finite(&self) -> bool {
        self.intercept.is_finite()
            && self.slope.is_finite()
            && self.profile.iter().all(|s| s.is_finite())
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Seasonal period actually fitted (0 for trend only).
    pub fn period(&self) -> usize {
        self.period
    }

    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Number of fitted parameters.
    pub fn n_parameters(&self) -> usize {
        // A centred profile has period - 1 free values.
        2 + self.period.saturating_sub(1)
    }

    pub fn trend_at(&self, week: u32) -> f64 {
        self.intercept + self.slope * f64::from(week)
    }

    pub fn seasonal_at(&self, week: u32) -> f64 {
        if self.period == 0 || week == 0 {
            return 0.0;
        }
        self.profile[(week as usize - 1) % self.period]
    }

    /// Trend plus seasonal at `week`.
    pub fn predict_at(&self, week: u32) -> f64 {
        self.trend_at(week) + self.seasonal_at(week)
    }

    /// Components of `values` under this model.
    pub fn decompose(&self, values: &[f64]) -> DecompositionResult {
        let weeks = 1..=values.len() as u32;
        let trend: Vec<f64> = weeks.clone().map(|w| self.trend_at(w)).collect();
        let seasonal: Vec<f64> = weeks.map(|w| self.seasonal_at(w)).collect();
        let residual = values
            .iter()
            .zip(trend.iter())
            .zip(seasonal.iter())
            .map(|((y, t), s)| y - t - s)
            .collect();

        DecompositionResult {
            trend,
            seasonal,
            residual,
        }
    }
}

/// Centred mean of the detrended series at each position in the period.
fn seasonal_profile(values: &[f64], intercept: f64, slope: f64, period: usize) -> Vec<f64> {
    let detrended: Vec<f64> = values
        .iter()
        .enumerate()
        .map(|(i, y)| y - (intercept + slope * (i + 1) as f64))
        .collect();

    let mut profile: Vec<f64> = (0..period)
        .map(|pos| {
            let column: Vec<f64> = detrended.iter().skip(pos).step_by(period).copied().collect();
            column.iter().sum::<f64>() / column.len() as f64
        })
        .collect();

    let level = profile.iter().sum::<f64>() / period as f64;
    for s in &mut profile {
        *s -= level;
    }
    profile
}

/// Additive decomposition: Y = T + S + R
pub struct AdditiveDecomposer;

impl AdditiveDecomposer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AdditiveDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl Decomposer for AdditiveDecomposer {
    fn decompose(&self, data: &[f64], period: usize) -> Result<DecompositionResult> {
        decompose_additive(data, period)
    }
}

/// Perform additive decomposition
pub fn decompose_additive(data: &[f64], period: usize) -> Result<DecompositionResult> {
    let model = AdditiveModel::fit(data, period)?;
    Ok(model.decompose(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_trend_recovered() {
        let data: Vec<f64> = (1..=10).map(|w| 100.0 + 5.0 * w as f64).collect();
        let model = AdditiveModel::fit(&data, 0).unwrap();

        assert_relative_eq!(model.slope(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(model.intercept(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(model.predict_at(12), 160.0, epsilon = 1e-9);
        assert_eq!(model.period(), 0);
    }

    #[test]
    fn test_additive_decomposition() {
        // Trend plus a period-4 pattern summing to zero
        let pattern = [6.0, -2.0, -6.0, 2.0];
        let data: Vec<f64> = (1..=24)
            .map(|w| 50.0 + 2.0 * w as f64 + pattern[(w - 1) % 4])
            .collect();

        let result = decompose_additive(&data, 4).unwrap();
        assert_eq!(result.trend.len(), data.len());
        assert_eq!(result.seasonal.len(), data.len());
        assert_eq!(result.residual.len(), data.len());

        let model = AdditiveModel::fit(&data, 4).unwrap();
        assert_eq!(model.period(), 4);
        assert_eq!(model.n_parameters(), 5);
        // Seasonal pattern repeats past the data
        assert_relative_eq!(
            model.seasonal_at(25),
            model.seasonal_at(1),
            epsilon = 1e-12
        );
        for r in &result.residual {
            assert!(r.abs() < 1.0);
        }
    }

    #[test]
    fn test_profile_is_centred() {
        let data: Vec<f64> = (0..16).map(|i| (i % 4) as f64 * 10.0 + 3.0).collect();
        let model = AdditiveModel::fit(&data, 4).unwrap();
        let total: f64 = (1..=4).map(|w| model.seasonal_at(w)).sum();
        assert_relative_eq!(total, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_short_data_skips_seasonality() {
        let data = vec![1.0, 2.0, 3.0];
        let result = decompose_additive(&data, 4).unwrap();
        assert_eq!(result.seasonal, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            AdditiveModel::fit(&[1.0], 0).unwrap_err(),
            ForecastError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_non_finite_fit_rejected() {
        let result = AdditiveModel::fit(&[1.0, f64::INFINITY, 3.0], 0);
        assert!(matches!(result, Err(ForecastError::NumericalError(_))));
    }
}
