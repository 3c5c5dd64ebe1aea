//! Predictor Service Provider Interface
//!
//! Defines traits for regression models trained on week index and for
//! demand predictors built on top of them.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{DemandPredictor, Regressor};
pub use error::{PredictionError, Result};
pub use model::{PredictionPoint, PredictionResult};
