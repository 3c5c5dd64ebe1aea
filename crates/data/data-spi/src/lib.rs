//! Dataset Service Provider Interface
//!
//! Defines the region snapshot and weekly demand models shared by every
//! analytical engine, plus the trait for sources that load them.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DatasetSource;
pub use error::{DataError, Result};
pub use model::{aggregate_totals, RegionSnapshot, ResourceTotals, Snapshot, WeekPoint, WeeklySeries};
