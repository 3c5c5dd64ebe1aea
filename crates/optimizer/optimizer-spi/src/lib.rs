//! Optimizer Service Provider Interface
//!
//! Defines the linear program model, the solver and allocation traits, and
//! the error type shared by every allocation optimizer.

use data_spi::{DataError, RegionSnapshot};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Optimizer errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizationError {
    #[error("Linear program is infeasible")]
    Infeasible,

    #[error("Linear program is unbounded")]
    Unbounded,

    #[error("Aggregated {resource} is negative: {value}")]
    NegativeBound { resource: String, value: i64 },

    #[error("Solution violates constraint '{constraint}': {lhs} > {rhs}")]
    ConstraintViolation {
        constraint: String,
        lhs: f64,
        rhs: f64,
    },

    #[error("Solver did not converge within {iterations} iterations")]
    IterationLimit { iterations: usize },

    #[error("Invalid program: {0}")]
    InvalidProgram(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<DataError> for OptimizationError {
    fn from(err: DataError) -> Self {
        OptimizationError::InvalidInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OptimizationError>;

// ============================================================================
// Linear Program
// ============================================================================

/// One `coefficients . x <= bound` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub label: String,
    pub coefficients: Vec<f64>,
    pub bound: f64,
}

impl Constraint {
    pub fn new(label: &str, coefficients: Vec<f64>, bound: f64) -> Self {
        Self {
            label: label.to_string(),
            coefficients,
            bound,
        }
    }

    /// Left-hand side evaluated at `x`.
    pub fn lhs(&self, x: &[f64]) -> f64 {
        self.coefficients.iter().zip(x).map(|(a, v)| a * v).sum()
    }
}

/// Maximise `objective . x` subject to `A x <= b` and `x >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearProgram {
    pub objective: Vec<f64>,
    pub constraints: Vec<Constraint>,
}

impl LinearProgram {
    pub fn maximize(objective: Vec<f64>) -> Self {
        Self {
            objective,
            constraints: Vec::new(),
        }
    }

    pub fn subject_to(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn n_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn n_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Check dimensions agree and every coefficient is finite.
    pub fn validate(&self) -> Result<()> {
        if self.objective.is_empty() {
            return Err(OptimizationError::InvalidProgram(
                "no decision variables".to_string(),
            ));
        }
        if self.objective.iter().any(|c| !c.is_finite()) {
            return Err(OptimizationError::InvalidProgram(
                "objective coefficients must be finite".to_string(),
            ));
        }
        for c in &self.constraints {
            if c.coefficients.len() != self.objective.len() {
                return Err(OptimizationError::InvalidProgram(format!(
                    "constraint '{}' has {} coefficients, expected {}",
                    c.label,
                    c.coefficients.len(),
                    self.objective.len()
                )));
            }
            if !c.bound.is_finite() || c.coefficients.iter().any(|a| !a.is_finite()) {
                return Err(OptimizationError::InvalidProgram(format!(
                    "constraint '{}' must be finite",
                    c.label
                )));
            }
        }
        Ok(())
    }

    pub fn objective_value(&self, x: &[f64]) -> f64 {
        self.objective.iter().zip(x).map(|(c, v)| c * v).sum()
    }

    /// First constraint `x` violates by more than `tolerance`, if any.
    pub fn first_violation(&self, x: &[f64], tolerance: f64) -> Option<&Constraint> {
        self.constraints
            .iter()
            .find(|c| c.lhs(x) > c.bound + tolerance)
    }
}

/// Optimal point of a linear program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub values: Vec<f64>,
    pub objective: f64,
    pub iterations: usize,
}

// ============================================================================
// Allocation Plan
// ============================================================================

/// Solved allocation in food-linked, medical-linked, shelter-linked order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub values: [f64; 3],
    /// Total allocation
    pub objective: f64,
}

impl AllocationPlan {
    pub fn food_linked(&self) -> f64 {
        self.values[0]
    }

    pub fn medical_linked(&self) -> f64 {
        self.values[1]
    }

    pub fn shelter_linked(&self) -> f64 {
        self.values[2]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

// ============================================================================
// Core Traits
// ============================================================================

/// Solves linear programs in the form of [`LinearProgram`].
pub trait LpSolver: Send + Sync {
    fn solve(&self, program: &LinearProgram) -> Result<Solution>;

    /// Solver name for logging.
    fn name(&self) -> &str;
}

/// Distributes aggregated supplies across the three allocation variables.
pub trait AllocationOptimizer: Send + Sync {
    fn optimize(&self, snapshot: &[RegionSnapshot]) -> Result<AllocationPlan>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> LinearProgram {
        LinearProgram::maximize(vec![1.0, 1.0])
            .subject_to(Constraint::new("a", vec![1.0, 2.0], 4.0))
            .subject_to(Constraint::new("b", vec![3.0, 1.0], 6.0))
    }

    #[test]
    fn test_dimensions() {
        let lp = program();
        assert_eq!(lp.n_variables(), 2);
        assert_eq!(lp.n_constraints(), 2);
        assert!(lp.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        let lp = program().subject_to(Constraint::new("c", vec![1.0], 1.0));
        assert!(matches!(
            lp.validate(),
            Err(OptimizationError::InvalidProgram(_))
        ));

        let lp = program().subject_to(Constraint::new("d", vec![1.0, 1.0], f64::NAN));
        assert!(lp.validate().is_err());
        assert!(LinearProgram::maximize(vec![]).validate().is_err());
    }

    #[test]
    fn test_first_violation() {
        let lp = program();
        assert!(lp.first_violation(&[1.0, 1.0], 1e-6).is_none());
        assert_eq!(lp.first_violation(&[2.0, 1.5], 1e-6).map(|c| c.label.as_str()), Some("a"));
        assert_eq!(lp.objective_value(&[2.0, 1.5]), 3.5);
    }

    #[test]
    fn test_error_messages() {
        let err = OptimizationError::NegativeBound {
            resource: "Shelters".to_string(),
            value: -5,
        };
        assert_eq!(err.to_string(), "Aggregated Shelters is negative: -5");
        assert_eq!(
            OptimizationError::Infeasible.to_string(),
            "Linear program is infeasible"
        );
    }

    #[test]
    fn test_plan_accessors_and_json() {
        let plan = AllocationPlan {
            values: [195.0, 1100.0, 0.0],
            objective: 1295.0,
        };
        assert_eq!(plan.food_linked(), 195.0);
        assert_eq!(plan.medical_linked(), 1100.0);
        assert_eq!(plan.shelter_linked(), 0.0);

        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(json, r#"{"values":[195.0,1100.0,0.0],"objective":1295.0}"#);
    }
}
