//! Contract module containing trait definitions for forecast operations

mod confidence_interval_computer;
mod decomposer;
mod demand_forecaster;
mod seasonality_detector;

pub use confidence_interval_computer::ConfidenceIntervalComputer;
pub use decomposer::Decomposer;
pub use demand_forecaster::DemandForecaster;
pub use seasonality_detector::SeasonalityDetector;
