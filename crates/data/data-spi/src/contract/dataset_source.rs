//! Dataset source trait definition.

use crate::error::Result;
use crate::model::{Snapshot, WeeklySeries};

/// Trait for sources that supply the current-state snapshot and the
/// historical weekly demand series.
///
/// Implementations only parse and shape data. Sign checks on resource
/// counts are left to the engines consuming the snapshot.
pub trait DatasetSource: Send + Sync {
    /// Data source name.
    fn name(&self) -> &str;

    /// Load the per-region supply snapshot.
    fn load_snapshot(&self) -> Result<Snapshot>;

    /// Load a single demand metric as a weekly series.
    fn load_series(&self, metric: &str) -> Result<WeeklySeries>;

    /// Names of the demand metrics this source can provide.
    fn metrics(&self) -> Result<Vec<String>>;
}
