//! CSV-backed dataset source
//!
//! Reads the region table (`Region, Food Supplies, Medical Kits, Shelters,
//! People Affected`) and the demand table (`Weeks, <metric>...`).

use data_api::DatasetConfig;
use data_spi::{
    DataError, DatasetSource, RegionSnapshot, Result, Snapshot, WeekPoint, WeeklySeries,
};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Dataset source reading two CSV files from disk.
///
/// Files are re-read on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    regions_path: Option<PathBuf>,
    demand_path: Option<PathBuf>,
    config: DatasetConfig,
}

impl CsvDatasetSource {
    /// Create a source with default column names.
    pub fn new() -> Self {
        Self {
            regions_path: None,
            demand_path: None,
            config: DatasetConfig::default(),
        }
    }

    pub fn with_regions(mut self, path: impl Into<PathBuf>) -> Self {
        self.regions_path = Some(path.into());
        self
    }

    pub fn with_demand(mut self, path: impl Into<PathBuf>) -> Self {
        self.demand_path = Some(path.into());
        self
    }

    pub fn with_config(mut self, config: DatasetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    fn open(path: Option<&Path>, table: &str) -> Result<File> {
        let path = path.ok_or_else(|| {
            DataError::ConfigError(format!("no {} table configured", table))
        })?;
        File::open(path)
            .map_err(|e| DataError::ReadFailed(format!("{}: {}", path.display(), e)))
    }
}

impl Default for CsvDatasetSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetSource for CsvDatasetSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load_snapshot(&self) -> Result<Snapshot> {
        let file = Self::open(self.regions_path.as_deref(), "region")?;
        parse_snapshot(file, &self.config)
    }

    fn load_series(&self, metric: &str) -> Result<WeeklySeries> {
        let file = Self::open(self.demand_path.as_deref(), "demand")?;
        parse_series(file, &self.config, metric)
    }

    fn metrics(&self) -> Result<Vec<String>> {
        let file = Self::open(self.demand_path.as_deref(), "demand")?;
        parse_metrics(file, &self.config)
    }
}

fn reader<R: Read>(input: R, config: &DatasetConfig) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))
}

fn field<'r>(record: &'r csv::StringRecord, idx: usize, line: usize) -> Result<&'r str> {
    record
        .get(idx)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DataError::ParseError(format!("line {}: empty field {}", line, idx)))
}

fn parse_count(record: &csv::StringRecord, idx: usize, line: usize) -> Result<i64> {
    let raw = field(record, idx, line)?;
    raw.parse::<i64>()
        .map_err(|e| DataError::ParseError(format!("line {}: '{}': {}", line, raw, e)))
}

fn read_error(e: csv::Error) -> DataError {
    DataError::ParseError(e.to_string())
}

/// Parse the region table into a snapshot.
pub fn parse_snapshot<R: Read>(input: R, config: &DatasetConfig) -> Result<Snapshot> {
    let mut rdr = reader(input, config);
    let headers = rdr.headers().map_err(read_error)?.clone();

    let [region, food, medical, shelters, people] = config.region_columns();
    let region_idx = column_index(&headers, region)?;
    let food_idx = column_index(&headers, food)?;
    let medical_idx = column_index(&headers, medical)?;
    let shelters_idx = column_index(&headers, shelters)?;
    let people_idx = column_index(&headers, people)?;

    let mut regions = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(read_error)?;
        let line = i + 2;
        regions.push(RegionSnapshot {
            region: field(&record, region_idx, line)?.to_string(),
            food_supplies: parse_count(&record, food_idx, line)?,
            medical_kits: parse_count(&record, medical_idx, line)?,
            shelters: parse_count(&record, shelters_idx, line)?,
            people_affected: parse_count(&record, people_idx, line)?,
        });
    }

    tracing::debug!(regions = regions.len(), "parsed region table");
    Snapshot::new(regions)
}

/// Parse one metric column of the demand table into a weekly series.
pub fn parse_series<R: Read>(
    input: R,
    config: &DatasetConfig,
    metric: &str,
) -> Result<WeeklySeries> {
    let mut rdr = reader(input, config);
    let headers = rdr.headers().map_err(read_error)?.clone();

    let week_idx = column_index(&headers, &config.week_column)?;
    let value_idx = column_index(&headers, metric)
        .map_err(|_| DataError::UnknownMetric(metric.to_string()))?;

    let mut points = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(read_error)?;
        let line = i + 2;
        let week_raw = field(&record, week_idx, line)?;
        let week = week_raw.parse::<u32>().map_err(|e| {
            DataError::ParseError(format!("line {}: week '{}': {}", line, week_raw, e))
        })?;
        let value_raw = field(&record, value_idx, line)?;
        let value = value_raw.parse::<f64>().map_err(|e| {
            DataError::ParseError(format!("line {}: value '{}': {}", line, value_raw, e))
        })?;
        points.push(WeekPoint::new(week, value));
    }

    if points.is_empty() {
        return Err(DataError::NoData);
    }

    WeeklySeries::new(metric, points)
}

/// Demand metric column names, i.e. every column except the week index.
pub fn parse_metrics<R: Read>(input: R, config: &DatasetConfig) -> Result<Vec<String>> {
    let mut rdr = reader(input, config);
    let headers = rdr.headers().map_err(read_error)?;
    column_index(headers, &config.week_column)?;
    Ok(headers
        .iter()
        .filter(|h| *h != config.week_column)
        .map(str::to_string)
        .collect())
}
