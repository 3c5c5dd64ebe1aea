//! Model module containing data structures

mod prediction_result;

pub use prediction_result::{PredictionPoint, PredictionResult};
