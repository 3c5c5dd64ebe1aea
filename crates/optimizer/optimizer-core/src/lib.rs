//! Optimizer Core
//!
//! Dense simplex solver and the paired-resource allocation optimizer.

pub mod allocator;
pub mod constraints;
pub mod simplex;

// Re-export SPI items
pub use optimizer_spi::{
    AllocationOptimizer, AllocationPlan, Constraint, LinearProgram, LpSolver, OptimizationError,
    Result, Solution,
};

// Re-export API config
pub use optimizer_api::OptimizerConfig;

// Re-export implementations
pub use allocator::PairedResourceAllocator;
pub use constraints::paired_program;
pub use simplex::SimplexSolver;
