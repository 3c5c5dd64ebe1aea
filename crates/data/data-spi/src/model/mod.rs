//! Data models for the relief planning dataset.

mod region;
mod series;

pub use region::{aggregate_totals, RegionSnapshot, ResourceTotals, Snapshot};
pub use series::{WeekPoint, WeeklySeries};
