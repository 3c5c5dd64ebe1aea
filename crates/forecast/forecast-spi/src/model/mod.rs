//! Model module containing data structures

mod confidence_interval;
mod decomposition_result;
mod forecast_result;

pub use confidence_interval::ConfidenceInterval;
pub use decomposition_result::DecompositionResult;
pub use forecast_result::{ForecastPoint, ForecastResult};
