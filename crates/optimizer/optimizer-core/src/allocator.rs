//! Allocation optimizer over aggregated region supplies.

use crate::constraints::{paired_program, N_VARIABLES};
use crate::simplex::SimplexSolver;
use data_spi::{aggregate_totals, RegionSnapshot};
use optimizer_api::OptimizerConfig;
use optimizer_spi::{AllocationOptimizer, AllocationPlan, LpSolver, OptimizationError, Result};

/// Solves the paired-resource program for a snapshot.
///
/// Supplies are summed across every region before solving; the program
/// keeps three variables and three constraints whatever the region count.
///
/// # Example
///
/// ```rust
/// use data_spi::RegionSnapshot;
/// use optimizer_core::{AllocationOptimizer, PairedResourceAllocator};
///
/// let regions = vec![
///     RegionSnapshot::new("North", 100, 40, 10, 500),
///     RegionSnapshot::new("South", 50, 20, 5, 300),
/// ];
/// let plan = PairedResourceAllocator::default().optimize(&regions).unwrap();
/// assert_eq!(plan.values.len(), 3);
/// ```
pub struct PairedResourceAllocator {
    config: OptimizerConfig,
    solver: Box<dyn LpSolver>,
}

impl PairedResourceAllocator {
    pub fn new(config: OptimizerConfig) -> Self {
        let solver = Box::new(SimplexSolver::from_config(&config));
        Self { config, solver }
    }

    /// Replace the linear program solver.
    pub fn with_solver(mut self, solver: Box<dyn LpSolver>) -> Self {
        self.solver = solver;
        self
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }
}

impl Default for PairedResourceAllocator {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}

impl AllocationOptimizer for PairedResourceAllocator {
    fn optimize(&self, snapshot: &[RegionSnapshot]) -> Result<AllocationPlan> {
        self.config.validate()?;

        if snapshot.is_empty() {
            tracing::warn!("empty snapshot, every supply bound is zero");
        }

        let totals = aggregate_totals(snapshot)?;
        let program = paired_program(&totals)?;
        let solution = self.solver.solve(&program)?;

        if solution.values.len() != N_VARIABLES {
            return Err(OptimizationError::InvalidProgram(format!(
                "solver returned {} values, expected {}",
                solution.values.len(),
                N_VARIABLES
            )));
        }

        let tol = self.config.tolerance;
        if let Some((i, &v)) = solution.values.iter().enumerate().find(|(_, v)| **v < -tol) {
            return Err(OptimizationError::ConstraintViolation {
                constraint: format!("x{} >= 0", i),
                lhs: -v,
                rhs: 0.0,
            });
        }
        if let Some(c) = program.first_violation(&solution.values, tol) {
            return Err(OptimizationError::ConstraintViolation {
                constraint: c.label.clone(),
                lhs: c.lhs(&solution.values),
                rhs: c.bound,
            });
        }

        let mut values = [0.0; N_VARIABLES];
        for (slot, v) in values.iter_mut().zip(&solution.values) {
            *slot = v.max(0.0);
        }

        tracing::debug!(
            solver = self.solver.name(),
            regions = snapshot.len(),
            food = totals.food_supplies,
            medical = totals.medical_kits,
            shelters = totals.shelters,
            iterations = solution.iterations,
            objective = solution.objective,
            "allocation solved"
        );

        Ok(AllocationPlan {
            values,
            objective: values.iter().sum(),
        })
    }
}
