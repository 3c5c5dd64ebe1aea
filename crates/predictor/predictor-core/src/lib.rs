//! Predictor Core
//!
//! Random forest regression on week index and the demand predictor built on
//! it.
//!
//! - [`tree`]: single-feature CART regression tree
//! - [`forest`]: bootstrap-aggregated ensemble of trees
//! - [`predictor`]: [`DemandPredictor`] implementation
//! - [`metrics`]: in-sample fit diagnostics

pub mod forest;
pub mod metrics;
pub mod predictor;
pub mod tree;

// Re-export SPI items
pub use predictor_spi::{
    DemandPredictor, PredictionError, PredictionPoint, PredictionResult, Regressor, Result,
};

// Re-export API config
pub use predictor_api::PredictorConfig;

// Re-export implementations
pub use forest::RandomForestRegressor;
pub use predictor::ForestDemandPredictor;
pub use tree::RegressionTree;
