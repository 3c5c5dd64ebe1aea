//! Dataset loading configuration types.

use data_spi::DataError;
use serde::{Deserialize, Serialize};

/// Column layout of the region and demand tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Region name column
    pub region_column: String,
    /// Food supplies column
    pub food_column: String,
    /// Medical kits column
    pub medical_column: String,
    /// Shelters column
    pub shelters_column: String,
    /// People affected column
    pub people_column: String,
    /// Week index column of the demand table
    pub week_column: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            region_column: "Region".to_string(),
            food_column: "Food Supplies".to_string(),
            medical_column: "Medical Kits".to_string(),
            shelters_column: "Shelters".to_string(),
            people_column: "People Affected".to_string(),
            week_column: "Weeks".to_string(),
            delimiter: b',',
        }
    }
}

impl DatasetConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for semicolon-separated exports.
    pub fn semicolon() -> Self {
        Self {
            delimiter: b';',
            ..Self::default()
        }
    }

    /// The five region-table columns in record order.
    pub fn region_columns(&self) -> [&str; 5] {
        [
            &self.region_column,
            &self.food_column,
            &self.medical_column,
            &self.shelters_column,
            &self.people_column,
        ]
    }
}

/// Builder for DatasetConfig.
#[derive(Debug, Default)]
pub struct DatasetConfigBuilder {
    region_column: Option<String>,
    food_column: Option<String>,
    medical_column: Option<String>,
    shelters_column: Option<String>,
    people_column: Option<String>,
    week_column: Option<String>,
    delimiter: Option<u8>,
}

impl DatasetConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region_column(mut self, name: &str) -> Self {
        self.region_column = Some(name.to_string());
        self
    }

    pub fn food_column(mut self, name: &str) -> Self {
        self.food_column = Some(name.to_string());
        self
    }

    pub fn medical_column(mut self, name: &str) -> Self {
        self.medical_column = Some(name.to_string());
        self
    }

    pub fn shelters_column(mut self, name: &str) -> Self {
        self.shelters_column = Some(name.to_string());
        self
    }

    pub fn people_column(mut self, name: &str) -> Self {
        self.people_column = Some(name.to_string());
        self
    }

    pub fn week_column(mut self, name: &str) -> Self {
        self.week_column = Some(name.to_string());
        self
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Build the configuration, filling unset columns with defaults.
    pub fn build(self) -> Result<DatasetConfig, DataError> {
        let defaults = DatasetConfig::default();
        let config = DatasetConfig {
            region_column: self.region_column.unwrap_or(defaults.region_column),
            food_column: self.food_column.unwrap_or(defaults.food_column),
            medical_column: self.medical_column.unwrap_or(defaults.medical_column),
            shelters_column: self.shelters_column.unwrap_or(defaults.shelters_column),
            people_column: self.people_column.unwrap_or(defaults.people_column),
            week_column: self.week_column.unwrap_or(defaults.week_column),
            delimiter: self.delimiter.unwrap_or(defaults.delimiter),
        };

        if config.week_column.trim().is_empty()
            || config.region_columns().iter().any(|c| c.trim().is_empty())
        {
            return Err(DataError::ConfigError(
                "column names must not be empty".to_string(),
            ));
        }

        Ok(config)
    }
}
