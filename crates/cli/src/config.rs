//! Combined engine configuration loaded from JSON.

use anyhow::{Context, Result};
use data_facade::DatasetConfig;
use forecast_facade::ForecastConfig;
use optimizer_facade::OptimizerConfig;
use predictor_facade::PredictorConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Settings for every engine plus the dataset column layout.
///
/// Sections left out of the file keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliefConfig {
    pub dataset: DatasetConfig,
    pub forecast: ForecastConfig,
    pub predictor: PredictorConfig,
    pub optimizer: OptimizerConfig,
}

impl ReliefConfig {
    /// Read a config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let file = File::open(path)
            .with_context(|| format!("Failed to open config {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, seed: Option<u64>, interval_width: Option<f64>) -> Self {
        if let Some(seed) = seed {
            self.predictor.seed = seed;
        }
        if let Some(width) = interval_width {
            self.forecast.interval_width = width;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_path_gives_defaults() {
        assert_eq!(ReliefConfig::load(None).unwrap(), ReliefConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"predictor": {{"seed": 7, "n_estimators": 20}}, "dataset": {{"week_column": "Week"}}}}"#
        )
        .unwrap();

        let config = ReliefConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.predictor.seed, 7);
        assert_eq!(config.predictor.n_estimators, 20);
        assert_eq!(config.predictor.horizon, 10);
        assert_eq!(config.dataset.week_column, "Week");
        assert_eq!(config.forecast, ForecastConfig::default());
    }

    #[test]
    fn test_bad_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = ReliefConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = ReliefConfig::default().with_overrides(Some(99), Some(0.95));
        assert_eq!(config.predictor.seed, 99);
        assert_eq!(config.forecast.interval_width, 0.95);

        let untouched = ReliefConfig::default().with_overrides(None, None);
        assert_eq!(untouched, ReliefConfig::default());
    }
}
