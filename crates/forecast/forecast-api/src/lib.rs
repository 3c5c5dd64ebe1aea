//! Forecast Consumer API
//!
//! Consumer configurations for the demand forecaster.
//!
//! This crate provides:
//! - Configuration types for the additive forecaster
//! - Re-exports from SPI for convenience

// Re-export traits from SPI
pub use forecast_spi::{
    ConfidenceInterval, ConfidenceIntervalComputer, DecompositionResult, Decomposer,
    DemandForecaster, ForecastError, ForecastPoint, ForecastResult, Result, SeasonalityDetector,
};

use serde::{Deserialize, Serialize};

/// Weeks projected past the last observation.
pub const DEFAULT_HORIZON: usize = 12;
/// Longest accepted horizon, ten years of weeks.
pub const MAX_HORIZON: usize = 520;
/// Yearly seasonality at weekly cadence.
pub const WEEKS_PER_YEAR: usize = 52;

/// How the seasonal component is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalityMode {
    /// Trend only
    None,
    /// Fixed period in weeks
    Fixed(usize),
    /// Detect the period by autocorrelation, up to `max_period` weeks
    Auto { max_period: usize },
}

impl Default for SeasonalityMode {
    fn default() -> Self {
        SeasonalityMode::Fixed(WEEKS_PER_YEAR)
    }
}

/// Configuration for the additive demand forecaster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of future weeks to project
    pub horizon: usize,
    /// Interval width (e.g., 0.80 for 80%)
    pub interval_width: f64,
    /// Seasonal component selection
    pub seasonality: SeasonalityMode,
    /// Minimum observations required to fit
    pub min_points: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            interval_width: 0.80,
            seasonality: SeasonalityMode::default(),
            min_points: 2,
        }
    }
}

impl ForecastConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_interval_width(mut self, width: f64) -> Self {
        self.interval_width = width;
        self
    }

    pub fn with_seasonality(mut self, seasonality: SeasonalityMode) -> Self {
        self.seasonality = seasonality;
        self
    }

    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 || self.horizon > MAX_HORIZON {
            return Err(invalid("horizon", "must be between 1 and 520"));
        }
        if !(self.interval_width > 0.0 && self.interval_width < 1.0) {
            return Err(invalid("interval_width", "must be between 0 and 1"));
        }
        if self.min_points < 2 {
            return Err(invalid("min_points", "must be at least 2"));
        }
        match self.seasonality {
            SeasonalityMode::Fixed(p) | SeasonalityMode::Auto { max_period: p } if p < 2 => {
                Err(ForecastError::InvalidPeriod(
                    "period must be at least 2".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}

fn invalid(name: &str, reason: &str) -> ForecastError {
    ForecastError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecastConfig, SeasonalityMode, MAX_HORIZON};
    pub use forecast_spi::{
        DemandForecaster, ForecastError, ForecastPoint, ForecastResult, Result,
    };
}
