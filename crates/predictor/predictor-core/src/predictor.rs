//! Random forest weekly demand predictor

use crate::forest::RandomForestRegressor;
use crate::metrics;
use data_spi::WeeklySeries;
use predictor_api::PredictorConfig;
use predictor_spi::{
    DemandPredictor, PredictionError, PredictionPoint, PredictionResult, Regressor, Result,
};

/// Predicts demand for the weeks after a training series with a random
/// forest keyed on week index.
///
/// # Known limitation
///
/// The forest cannot extrapolate. Every week past the training range lands
/// in the rightmost leaf of each tree, so all predicted weeks share one value
/// close to the mean of the latest observations, even when the series has a
/// clear trend. Use the additive forecaster when the trend matters.
///
/// # Example
///
/// ```rust
/// use data_spi::WeeklySeries;
/// use predictor_core::{DemandPredictor, ForestDemandPredictor};
///
/// let series = WeeklySeries::from_values("food", &[500.0, 520.0, 540.0, 580.0, 600.0]);
/// let result = ForestDemandPredictor::default().predict(&series).unwrap();
///
/// assert_eq!(result.weeks(), (6..=15).collect::<Vec<u32>>());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ForestDemandPredictor {
    config: PredictorConfig,
}

impl ForestDemandPredictor {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Train a forest on `(week, value)` pairs of the series.
    pub fn train(&self, series: &WeeklySeries) -> Result<RandomForestRegressor> {
        self.config.validate()?;
        series.validate_values()?;

        let n = series.len();
        if n < self.config.min_samples {
            return Err(PredictionError::InsufficientData {
                required: self.config.min_samples,
                actual: n,
            });
        }

        let weeks = series.weeks();
        let values = series.values();

        let mut forest = RandomForestRegressor::new(self.config.n_estimators, self.config.seed)
            .with_max_depth(self.config.max_depth)
            .with_min_samples_split(self.config.min_samples_split);
        forest.fit(&weeks, &values)?;

        let fitted = forest.predict(&weeks)?;
        tracing::debug!(
            metric = series.metric(),
            trees = forest.n_estimators(),
            seed = forest.seed(),
            rmse = metrics::rmse(&values, &fitted),
            r_squared = metrics::r_squared(&values, &fitted),
            "forest trained"
        );

        Ok(forest)
    }
}

impl DemandPredictor for ForestDemandPredictor {
    fn predict(&self, series: &WeeklySeries) -> Result<PredictionResult> {
        let forest = self.train(series)?;

        let last_week = series.last_week();
        let end = u32::try_from(self.config.horizon)
            .ok()
            .and_then(|h| last_week.checked_add(h))
            .ok_or_else(|| {
                PredictionError::NumericalError("Predicted week index overflows u32".to_string())
            })?;
        let future_weeks: Vec<u32> = (last_week + 1..=end).collect();
        let features: Vec<f64> = future_weeks.iter().map(|&w| f64::from(w)).collect();
        let predicted = forest.predict(&features)?;

        if predicted.iter().any(|v| !v.is_finite()) {
            return Err(PredictionError::NumericalError(
                "Forest produced non-finite predictions".to_string(),
            ));
        }

        Ok(PredictionResult {
            metric: series.metric().to_string(),
            last_training_week: last_week,
            points: future_weeks
                .into_iter()
                .zip(predicted)
                .map(|(week, predicted_value)| PredictionPoint {
                    week,
                    predicted_value,
                })
                .collect(),
        })
    }

    fn horizon(&self) -> usize {
        self.config.horizon
    }
}
