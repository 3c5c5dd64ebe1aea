//! Weekly demand series types.

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};

/// A single weekly observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekPoint {
    /// Week index, starting at 1
    pub week: u32,
    /// Observed demand
    pub value: f64,
}

impl WeekPoint {
    pub fn new(week: u32, value: f64) -> Self {
        Self { week, value }
    }
}

/// Ordered weekly observations of one named demand metric.
///
/// Construction guarantees weeks run 1, 2, 3, ... without gaps. Value
/// checks (finite, non-negative) are left to [`WeeklySeries::validate_values`]
/// so each engine can report them through its own error type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct WeeklySeries {
    metric: String,
    points: Vec<WeekPoint>,
}

#[derive(Deserialize)]
struct RawSeries {
    metric: String,
    points: Vec<WeekPoint>,
}

impl TryFrom<RawSeries> for WeeklySeries {
    type Error = DataError;

    fn try_from(raw: RawSeries) -> Result<Self> {
        WeeklySeries::new(&raw.metric, raw.points)
    }
}

impl WeeklySeries {
    /// Create a series from explicit points.
    pub fn new(metric: &str, points: Vec<WeekPoint>) -> Result<Self> {
        for (i, p) in points.iter().enumerate() {
            let expected = i as u32 + 1;
            if p.week != expected {
                return Err(DataError::InvalidWeek {
                    expected,
                    found: p.week,
                });
            }
        }
        Ok(Self {
            metric: metric.to_string(),
            points,
        })
    }

    /// Create a series numbering `values` as weeks 1..=n.
    pub fn from_values(metric: &str, values: &[f64]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| WeekPoint::new(i as u32 + 1, v))
            .collect();
        Self {
            metric: metric.to_string(),
            points,
        }
    }

    /// Check every value is finite and non-negative.
    pub fn validate_values(&self) -> Result<()> {
        for p in &self.points {
            if !p.value.is_finite() {
                return Err(DataError::NonFinite { week: p.week });
            }
            if p.value < 0.0 {
                return Err(DataError::NegativeValue {
                    week: p.week,
                    value: p.value,
                });
            }
        }
        Ok(())
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn points(&self) -> &[WeekPoint] {
        &self.points
    }

    /// Week indices as floats, for model fitting.
    pub fn weeks(&self) -> Vec<f64> {
        self.points.iter().map(|p| f64::from(p.week)).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Last observed week, or 0 for an empty series.
    pub fn last_week(&self) -> u32 {
        self.points.last().map_or(0, |p| p.week)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
