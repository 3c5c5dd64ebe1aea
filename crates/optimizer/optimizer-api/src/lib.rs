//! Optimizer Consumer API
//!
//! Consumer configuration for the allocation optimizer and its solver.

pub use optimizer_spi::{
    AllocationOptimizer, AllocationPlan, Constraint, LinearProgram, LpSolver, OptimizationError,
    Result, Solution,
};

use serde::{Deserialize, Serialize};

/// Solver and verification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Feasibility and optimality tolerance
    pub tolerance: f64,
    /// Pivot limit across both simplex phases
    pub max_iterations: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1000,
        }
    }
}

impl OptimizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance > 0.0 && self.tolerance < 1.0) {
            return Err(OptimizationError::InvalidConfig(
                "tolerance must be between 0 and 1".into(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(OptimizationError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::OptimizerConfig;
    pub use optimizer_spi::{AllocationOptimizer, AllocationPlan, OptimizationError, Result};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OptimizerConfig::default();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(OptimizerConfig::new().with_tolerance(0.0).validate().is_err());
        assert!(OptimizerConfig::new().with_tolerance(f64::NAN).validate().is_err());
        assert!(OptimizerConfig::new().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn test_partial_json() {
        let config: OptimizerConfig = serde_json::from_str(r#"{"max_iterations":50}"#).unwrap();
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.tolerance, 1e-6);
    }
}
