//! Forecast output model

use serde::{Deserialize, Serialize};

/// One row of a forecast: a point estimate and its interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub week: u32,
    pub point_estimate: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl ForecastPoint {
    /// Whether `lower_bound <= point_estimate <= upper_bound`.
    pub fn is_ordered(&self) -> bool {
        self.lower_bound <= self.point_estimate && self.point_estimate <= self.upper_bound
    }
}

/// Fitted history followed by the projected horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Demand metric the series was drawn from
    pub metric: String,
    /// Number of leading rows covering observed weeks
    pub history_len: usize,
    /// Interval width (e.g., 0.8 for an 80% interval)
    pub confidence_level: f64,
    /// Rows in week order
    pub points: Vec<ForecastPoint>,
}

impl ForecastResult {
    /// Rows for observed weeks.
    pub fn historical(&self) -> &[ForecastPoint] {
        &self.points[..self.history_len.min(self.points.len())]
    }

    /// Rows for projected weeks.
    pub fn future(&self) -> &[ForecastPoint] {
        &self.points[self.history_len.min(self.points.len())..]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(week: u32, estimate: f64) -> ForecastPoint {
        ForecastPoint {
            week,
            point_estimate: estimate,
            lower_bound: estimate - 1.0,
            upper_bound: estimate + 1.0,
        }
    }

    #[test]
    fn test_split_history_and_future() {
        let result = ForecastResult {
            metric: "food".to_string(),
            history_len: 2,
            confidence_level: 0.8,
            points: vec![point(1, 10.0), point(2, 11.0), point(3, 12.0)],
        };
        assert_eq!(result.len(), 3);
        assert_eq!(result.historical().len(), 2);
        assert_eq!(result.future()[0].week, 3);
    }

    #[test]
    fn test_is_ordered() {
        assert!(point(1, 5.0).is_ordered());
        let inverted = ForecastPoint {
            week: 1,
            point_estimate: 5.0,
            lower_bound: 6.0,
            upper_bound: 7.0,
        };
        assert!(!inverted.is_ordered());
    }
}
