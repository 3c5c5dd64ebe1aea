//! Dataset Consumer API
//!
//! Configuration types and builders for loading relief datasets.

mod config;

pub use config::{DatasetConfig, DatasetConfigBuilder};
