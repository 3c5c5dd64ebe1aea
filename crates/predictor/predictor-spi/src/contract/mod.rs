//! Contract module containing trait definitions for prediction

mod demand_predictor;
mod regressor;

pub use demand_predictor::DemandPredictor;
pub use regressor::Regressor;
