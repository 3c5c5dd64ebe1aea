//! Dataset Facade
//!
//! Unified re-exports for the dataset module.
//!
//! This facade provides a single entry point for all dataset functionality:
//! - `data_spi` - Models, the `DatasetSource` trait and errors
//! - `data_api` - Column configuration and builders
//! - `data_core` - CSV and in-memory sources, sample dataset
//!
//! # Example
//!
//! ```rust
//! use data_facade::{DatasetSource, InMemoryDatasetSource, FOOD_DEMAND};
//!
//! let source = InMemoryDatasetSource::sample();
//! let snapshot = source.load_snapshot().unwrap();
//! let food = source.load_series(FOOD_DEMAND).unwrap();
//!
//! assert_eq!(snapshot.totals().unwrap().food_supplies, 5400);
//! assert_eq!(food.len(), 10);
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;
