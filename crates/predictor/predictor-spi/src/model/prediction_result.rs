//! Prediction output model

use serde::{Deserialize, Serialize};

/// Predicted demand for one future week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub week: u32,
    pub predicted_value: f64,
}

/// Predictions for the weeks following the training range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Demand metric the model was trained on
    pub metric: String,
    /// Last week seen during training
    pub last_training_week: u32,
    /// Rows in week order
    pub points: Vec<PredictionPoint>,
}

impl PredictionResult {
    pub fn weeks(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.week).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted_value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
