//! Predictor Consumer API
//!
//! Consumer configuration for the random forest demand predictor.

// Re-export traits from SPI
pub use predictor_spi::{
    DemandPredictor, PredictionError, PredictionPoint, PredictionResult, Regressor, Result,
};

use serde::{Deserialize, Serialize};

/// Weeks predicted past the last training week.
pub const DEFAULT_HORIZON: usize = 10;
/// Longest accepted horizon, ten years of weeks.
pub const MAX_HORIZON: usize = 520;
/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;
/// Fewest training samples a predictor may be configured to accept.
pub const MIN_TRAINING_SAMPLES: usize = 4;

/// Configuration for the random forest demand predictor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Number of future weeks to predict
    pub horizon: usize,
    /// Number of trees in the ensemble
    pub n_estimators: usize,
    /// Seed for bootstrap sampling
    pub seed: u64,
    /// Maximum tree depth, unlimited when `None`
    pub max_depth: Option<usize>,
    /// Minimum samples required to split a node
    pub min_samples_split: usize,
    /// Minimum training samples
    pub min_samples: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            n_estimators: 100,
            seed: DEFAULT_SEED,
            max_depth: None,
            min_samples_split: 2,
            min_samples: MIN_TRAINING_SAMPLES,
        }
    }
}

impl PredictorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.min_samples_split = min_samples_split;
        self
    }

    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 || self.horizon > MAX_HORIZON {
            return Err(invalid("horizon", "must be between 1 and 520"));
        }
        if self.n_estimators == 0 {
            return Err(invalid("n_estimators", "must be at least 1"));
        }
        if self.max_depth == Some(0) {
            return Err(invalid("max_depth", "must be at least 1"));
        }
        if self.min_samples_split < 2 {
            return Err(invalid("min_samples_split", "must be at least 2"));
        }
        if self.min_samples < MIN_TRAINING_SAMPLES {
            return Err(invalid("min_samples", "must be at least 4"));
        }
        Ok(())
    }
}

fn invalid(name: &str, reason: &str) -> PredictionError {
    PredictionError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{PredictorConfig, MAX_HORIZON};
    pub use predictor_spi::{
        DemandPredictor, PredictionError, PredictionPoint, PredictionResult, Result,
    };
}
