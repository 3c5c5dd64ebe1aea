//! Additive weekly demand forecaster
//!
//! Fits [`AdditiveModel`] to the observed weeks, evaluates it over the
//! history plus the configured horizon, and wraps every estimate in a
//! residual-based interval.

use crate::confidence::StandardErrorComputer;
use crate::decomposition::AdditiveModel;
use crate::seasonality::AutocorrelationDetector;
use data_spi::WeeklySeries;
use forecast_api::{ForecastConfig, SeasonalityMode};
use forecast_spi::{
    ConfidenceIntervalComputer, DemandForecaster, ForecastError, ForecastPoint, ForecastResult,
    Result, SeasonalityDetector,
};

/// Trend plus seasonality forecaster for weekly demand.
///
/// # Example
///
/// ```rust
/// use data_spi::WeeklySeries;
/// use forecast_core::{AdditiveForecaster, DemandForecaster};
///
/// let series = WeeklySeries::from_values("food", &[500.0, 520.0, 540.0, 580.0]);
/// let result = AdditiveForecaster::default().forecast(&series).unwrap();
///
/// assert_eq!(result.len(), 4 + 12);
/// assert_eq!(result.future()[0].week, 5);
/// ```
pub struct AdditiveForecaster {
    config: ForecastConfig,
    detector: Box<dyn SeasonalityDetector>,
    intervals: Box<dyn ConfidenceIntervalComputer>,
}

impl AdditiveForecaster {
    pub fn new(config: ForecastConfig) -> Self {
        Self {
            config,
            detector: Box::new(AutocorrelationDetector::new()),
            intervals: Box::new(StandardErrorComputer::new()),
        }
    }

    /// Replace the seasonality detector used in `Auto` mode.
    pub fn with_detector(mut self, detector: Box<dyn SeasonalityDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// Replace the interval computer.
    pub fn with_interval_computer(mut self, intervals: Box<dyn ConfidenceIntervalComputer>) -> Self {
        self.intervals = intervals;
        self
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    fn select_period(&self, values: &[f64]) -> usize {
        match self.config.seasonality {
            SeasonalityMode::None => 0,
            SeasonalityMode::Fixed(period) => {
                if values.len() < period * 2 {
                    tracing::warn!(
                        period,
                        observations = values.len(),
                        "too few observations for seasonality, fitting trend only"
                    );
                    0
                } else {
                    period
                }
            }
            SeasonalityMode::Auto { max_period } => {
                match self.detector.detect(values, max_period) {
                    Some(period) => period,
                    None => {
                        tracing::warn!(
                            max_period,
                            observations = values.len(),
                            "no seasonal period detected, fitting trend only"
                        );
                        0
                    }
                }
            }
        }
    }
}

impl Default for AdditiveForecaster {
    fn default() -> Self {
        Self::new(ForecastConfig::default())
    }
}

impl DemandForecaster for AdditiveForecaster {
    fn forecast(&self, series: &WeeklySeries) -> Result<ForecastResult> {
        self.config.validate()?;
        series.validate_values()?;

        let n = series.len();
        if n < self.config.min_points {
            return Err(ForecastError::InsufficientData {
                required: self.config.min_points,
                actual: n,
            });
        }

        let values = series.values();
        let period = self.select_period(&values);
        let model = AdditiveModel::fit(&values, period)?;
        let residuals = model.decompose(&values).residual;

        let last_week = series.last_week();
        let end = u32::try_from(self.config.horizon)
            .ok()
            .and_then(|h| last_week.checked_add(h))
            .ok_or_else(|| {
                ForecastError::NumericalError("Forecast week index overflows u32".to_string())
            })?;
        let weeks: Vec<u32> = (1..=end).collect();
        let estimates: Vec<f64> = weeks.iter().map(|&w| model.predict_at(w)).collect();

        let ci = self
            .intervals
            .compute(&estimates, &residuals, n, self.config.interval_width);

        let points: Vec<ForecastPoint> = weeks
            .iter()
            .zip(ci.forecast.iter())
            .zip(ci.lower.iter().zip(ci.upper.iter()))
            .map(|((&week, &point_estimate), (&lower_bound, &upper_bound))| ForecastPoint {
                week,
                point_estimate,
                lower_bound,
                upper_bound,
            })
            .collect();

        if points.len() != weeks.len()
            || points
                .iter()
                .any(|p| !p.point_estimate.is_finite() || !p.is_ordered())
        {
            return Err(ForecastError::NumericalError(
                "Interval computation produced invalid bounds".to_string(),
            ));
        }

        tracing::debug!(
            metric = series.metric(),
            slope = model.slope(),
            period = model.period(),
            rows = points.len(),
            "forecast fitted"
        );

        Ok(ForecastResult {
            metric: series.metric().to_string(),
            history_len: n,
            confidence_level: self.config.interval_width,
            points,
        })
    }

    fn horizon(&self) -> usize {
        self.config.horizon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Warnings emitted while `f` runs.
    fn warnings_during(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn food() -> WeeklySeries {
        WeeklySeries::from_values(
            "food",
            &[500.0, 520.0, 540.0, 580.0, 600.0, 620.0, 650.0, 670.0, 700.0, 720.0],
        )
    }

    #[test]
    fn test_row_count_and_weeks() {
        let result = AdditiveForecaster::default().forecast(&food()).unwrap();
        assert_eq!(result.len(), 22);
        assert_eq!(result.history_len, 10);
        let weeks: Vec<u32> = result.points.iter().map(|p| p.week).collect();
        assert_eq!(weeks, (1..=22).collect::<Vec<u32>>());
    }

    #[test]
    fn test_bounds_ordered_and_widen() {
        let result = AdditiveForecaster::default().forecast(&food()).unwrap();
        assert!(result.points.iter().all(ForecastPoint::is_ordered));

        let future = result.future();
        let first = future[0].upper_bound - future[0].lower_bound;
        let last = future[11].upper_bound - future[11].lower_bound;
        assert!(last > first);
    }

    #[test]
    fn test_follows_upward_trend() {
        let result = AdditiveForecaster::default().forecast(&food()).unwrap();
        let future = result.future();
        assert!(future[11].point_estimate > future[0].point_estimate);
        assert!(future[0].point_estimate > 720.0);
    }

    #[test]
    fn test_two_points_is_enough() {
        let series = WeeklySeries::from_values("food", &[10.0, 14.0]);
        let result = AdditiveForecaster::default().forecast(&series).unwrap();
        assert_eq!(result.len(), 14);
        assert_relative_eq!(result.points[2].point_estimate, 18.0, epsilon = 1e-9);
    }

    #[test]
    fn test_one_point_fails() {
        let series = WeeklySeries::from_values("food", &[10.0]);
        let err = AdditiveForecaster::default().forecast(&series).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_non_finite_fails() {
        let series = WeeklySeries::from_values("food", &[10.0, f64::NAN, 12.0]);
        let err = AdditiveForecaster::default().forecast(&series).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidData(_)));
    }

    #[test]
    fn test_invalid_config_fails() {
        let forecaster = AdditiveForecaster::new(ForecastConfig::new().with_interval_width(1.5));
        assert!(matches!(
            forecaster.forecast(&food()),
            Err(ForecastError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_oversized_horizon_rejected() {
        let forecaster = AdditiveForecaster::new(ForecastConfig::new().with_horizon(usize::MAX));
        assert!(matches!(
            forecaster.forecast(&food()),
            Err(ForecastError::InvalidParameter { ref name, .. }) if name == "horizon"
        ));
    }

    #[test]
    fn test_fixed_seasonality_used_when_covered() {
        let pattern = [30.0, -10.0, -30.0, 10.0];
        let values: Vec<f64> = (0..16).map(|i| 200.0 + 2.0 * i as f64 + pattern[i % 4]).collect();
        let series = WeeklySeries::from_values("medical", &values);
        let forecaster = AdditiveForecaster::new(
            ForecastConfig::new().with_seasonality(SeasonalityMode::Fixed(4)),
        );

        let result = forecaster.forecast(&series).unwrap();
        let future = result.future();
        // Week 17 sits at the same phase as week 1
        assert!(future[0].point_estimate > future[1].point_estimate);
        assert!(future[2].point_estimate < future[3].point_estimate);
    }

    #[test]
    fn test_skipped_fixed_seasonality_warns() {
        let logs = warnings_during(|| {
            AdditiveForecaster::default().forecast(&food()).unwrap();
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("too few observations for seasonality"));
    }

    #[test]
    fn test_undetected_auto_seasonality_warns() {
        let forecaster = AdditiveForecaster::new(
            ForecastConfig::new().with_seasonality(SeasonalityMode::Auto { max_period: 8 }),
        );
        let series = WeeklySeries::from_values("food", &[10.0, 12.0, 14.0]);
        let logs = warnings_during(|| {
            forecaster.forecast(&series).unwrap();
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("no seasonal period detected"));
    }

    #[test]
    fn test_covered_seasonality_is_silent() {
        let forecaster = AdditiveForecaster::new(
            ForecastConfig::new().with_seasonality(SeasonalityMode::Fixed(2)),
        );
        let logs = warnings_during(|| {
            forecaster.forecast(&food()).unwrap();
        });
        assert!(logs.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let forecaster = AdditiveForecaster::default();
        assert_eq!(
            forecaster.forecast(&food()).unwrap(),
            forecaster.forecast(&food()).unwrap()
        );
    }
}
