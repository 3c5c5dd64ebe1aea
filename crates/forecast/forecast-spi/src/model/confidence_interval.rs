//! Confidence interval model

/// Confidence interval result
#[derive(Debug, Clone)]
pub struct ConfidenceInterval {
    /// Point estimates
    pub forecast: Vec<f64>,
    /// Lower bound of confidence interval
    pub lower: Vec<f64>,
    /// Upper bound of confidence interval
    pub upper: Vec<f64>,
    /// Confidence level (e.g., 0.80 for 80%)
    pub confidence_level: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_interval_creation() {
        let ci = ConfidenceInterval {
            forecast: vec![100.0, 110.0, 120.0],
            lower: vec![90.0, 100.0, 110.0],
            upper: vec![110.0, 120.0, 130.0],
            confidence_level: 0.80,
        };

        assert_eq!(ci.forecast, vec![100.0, 110.0, 120.0]);
        assert_eq!(ci.confidence_level, 0.80);
        for i in 0..ci.forecast.len() {
            assert!(ci.lower[i] <= ci.forecast[i]);
            assert!(ci.forecast[i] <= ci.upper[i]);
        }
    }

    #[test]
    fn test_confidence_interval_empty_vectors() {
        let ci = ConfidenceInterval {
            forecast: vec![],
            lower: vec![],
            upper: vec![],
            confidence_level: 0.90,
        };

        assert!(ci.forecast.is_empty());
        assert!(ci.lower.is_empty());
        assert!(ci.upper.is_empty());
    }
}
