//! JSON report types and the all-engine plan.

use crate::config::ReliefConfig;
use data_facade::{DatasetSource, WeeklySeries};
use forecast_facade::{AdditiveForecaster, DemandForecaster, ForecastError, ForecastResult};
use optimizer_facade::{AllocationOptimizer, AllocationPlan, PairedResourceAllocator};
use predictor_facade::{DemandPredictor, ForestDemandPredictor, PredictionError, PredictionResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Engine result rendered as `{"ok": ...}` or `{"error": "..."}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    Ok(T),
    Error(String),
}

impl<T> Outcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }
}

impl<T, E: Display> From<std::result::Result<T, E>> for Outcome<T> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(e) => Outcome::Error(e.to_string()),
        }
    }
}

/// Training series alongside the weeks predicted from it.
#[derive(Debug, Serialize)]
pub struct PredictionReport {
    pub history: WeeklySeries,
    pub prediction: PredictionResult,
}

/// Every engine run against one dataset.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub allocation: Outcome<AllocationPlan>,
    pub forecasts: BTreeMap<String, Outcome<ForecastResult>>,
    pub predictions: BTreeMap<String, Outcome<PredictionReport>>,
    /// Dataset problems that kept engines from running at all
    pub errors: Vec<String>,
}

pub fn predict_report(
    predictor: &dyn DemandPredictor,
    series: WeeklySeries,
) -> std::result::Result<PredictionReport, PredictionError> {
    let prediction = predictor.predict(&series)?;
    Ok(PredictionReport {
        history: series,
        prediction,
    })
}

/// Run the optimizer and, for every demand metric, the forecaster and
/// predictor. A failing engine is recorded in place and never stops the
/// others.
pub fn build_plan(source: &dyn DatasetSource, config: &ReliefConfig) -> PlanReport {
    let allocator = PairedResourceAllocator::new(config.optimizer.clone());
    let forecaster = AdditiveForecaster::new(config.forecast.clone());
    let predictor = ForestDemandPredictor::new(config.predictor.clone());

    let allocation = match source.load_snapshot() {
        Ok(snapshot) => allocator.optimize(snapshot.regions()).into(),
        Err(e) => Outcome::Error(e.to_string()),
    };

    let mut report = PlanReport {
        allocation,
        forecasts: BTreeMap::new(),
        predictions: BTreeMap::new(),
        errors: Vec::new(),
    };

    let metrics = match source.metrics() {
        Ok(metrics) => metrics,
        Err(e) => {
            tracing::warn!(error = %e, "demand table unavailable");
            report.errors.push(e.to_string());
            return report;
        }
    };

    for metric in metrics {
        let series = source.load_series(&metric);

        let forecast = series
            .clone()
            .map_err(ForecastError::from)
            .and_then(|s| forecaster.forecast(&s));
        let prediction = series
            .map_err(PredictionError::from)
            .and_then(|s| predict_report(&predictor, s));

        if let Err(e) = &forecast {
            tracing::warn!(metric = %metric, error = %e, "forecast failed");
        }
        if let Err(e) = &prediction {
            tracing::warn!(metric = %metric, error = %e, "prediction failed");
        }

        report.forecasts.insert(metric.clone(), forecast.into());
        report.predictions.insert(metric, prediction.into());
    }

    let failed = report.forecasts.values().filter(|o| !o.is_ok()).count()
        + report.predictions.values().filter(|o| !o.is_ok()).count()
        + usize::from(!report.allocation.is_ok());
    tracing::info!(metrics = report.forecasts.len(), failed, "plan complete");

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_facade::{InMemoryDatasetSource, Snapshot};

    #[test]
    fn test_sample_plan_runs_every_engine() {
        let report = build_plan(&InMemoryDatasetSource::sample(), &ReliefConfig::default());

        assert!(report.allocation.is_ok());
        assert_eq!(report.forecasts.len(), 2);
        assert_eq!(report.predictions.len(), 2);
        assert!(report.forecasts.values().all(Outcome::is_ok));
        assert!(report.predictions.values().all(Outcome::is_ok));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_failures_are_reported_in_place() {
        let source = InMemoryDatasetSource::new(
            Snapshot::default(),
            vec![
                WeeklySeries::from_values("short", &[5.0, 6.0, 7.0]),
                WeeklySeries::from_values("tiny", &[5.0]),
            ],
        );
        let report = build_plan(&source, &ReliefConfig::default());

        // Three weeks forecast fine but are too few to train the forest
        assert!(report.forecasts["short"].is_ok());
        assert!(!report.predictions["short"].is_ok());
        assert!(!report.forecasts["tiny"].is_ok());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["predictions"]["short"]["error"],
            "Insufficient data: need at least 4 points, got 3"
        );
        assert!(json["allocation"]["ok"]["values"].is_array());
    }
}
