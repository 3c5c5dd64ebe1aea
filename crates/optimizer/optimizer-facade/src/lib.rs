//! Optimizer Facade
//!
//! Unified re-exports for the allocation optimizer plus one-call helpers.
//!
//! # Example
//!
//! ```rust
//! use data_spi::RegionSnapshot;
//!
//! let regions = vec![RegionSnapshot::new("Delta", 800, 150, 30, 3000)];
//! let plan = optimizer_facade::optimize(&regions).unwrap();
//! assert!(plan.values.iter().all(|v| *v >= 0.0));
//! ```

pub use optimizer_api::*;

// Re-export core modules for direct access
pub use optimizer_core::{allocator, constraints, simplex};

// Re-export implementations at root
pub use optimizer_core::{paired_program, PairedResourceAllocator, SimplexSolver};

use data_spi::RegionSnapshot;

/// Allocate supplies with the default configuration (tolerance 1e-6).
pub fn optimize(snapshot: &[RegionSnapshot]) -> Result<AllocationPlan> {
    PairedResourceAllocator::default().optimize(snapshot)
}

/// Allocate supplies with an explicit configuration.
pub fn optimize_with(snapshot: &[RegionSnapshot], config: OptimizerConfig) -> Result<AllocationPlan> {
    PairedResourceAllocator::new(config).optimize(snapshot)
}
