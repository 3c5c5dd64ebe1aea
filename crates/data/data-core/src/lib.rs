//! Dataset Core
//!
//! Implementations for dataset sources.

pub mod csv_source;
pub mod fixture;

pub use csv_source::{parse_metrics, parse_series, parse_snapshot, CsvDatasetSource};
pub use fixture::{
    sample_demand, sample_snapshot, InMemoryDatasetSource, FOOD_DEMAND, MEDICAL_DEMAND,
};
