//! In-memory dataset source and the bundled sample dataset.

use data_spi::{DataError, DatasetSource, RegionSnapshot, Result, Snapshot, WeeklySeries};

/// Food demand metric name used by the sample dataset.
pub const FOOD_DEMAND: &str = "Food Demand";
/// Medical demand metric name used by the sample dataset.
pub const MEDICAL_DEMAND: &str = "Medical Demand";

/// Dataset source holding everything in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatasetSource {
    snapshot: Snapshot,
    series: Vec<WeeklySeries>,
}

impl InMemoryDatasetSource {
    pub fn new(snapshot: Snapshot, series: Vec<WeeklySeries>) -> Self {
        Self { snapshot, series }
    }

    /// Source preloaded with the sample dataset.
    pub fn sample() -> Self {
        Self::new(sample_snapshot(), sample_demand())
    }
}

impl DatasetSource for InMemoryDatasetSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn load_snapshot(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }

    fn load_series(&self, metric: &str) -> Result<WeeklySeries> {
        self.series
            .iter()
            .find(|s| s.metric() == metric)
            .cloned()
            .ok_or_else(|| DataError::UnknownMetric(metric.to_string()))
    }

    fn metrics(&self) -> Result<Vec<String>> {
        Ok(self.series.iter().map(|s| s.metric().to_string()).collect())
    }
}

/// Five-region snapshot totalling 5400 food, 1100 medical kits, 195 shelters.
pub fn sample_snapshot() -> Snapshot {
    let regions = vec![
        RegionSnapshot::new("Northern Highlands", 1200, 300, 50, 5000),
        RegionSnapshot::new("Eastern Delta", 800, 150, 30, 3000),
        RegionSnapshot::new("Southern Coast", 1500, 250, 45, 7000),
        RegionSnapshot::new("Western Plains", 1000, 200, 40, 4500),
        RegionSnapshot::new("Central Valley", 900, 200, 30, 3500),
    ];
    // Region names above are distinct.
    Snapshot::new(regions).unwrap_or_default()
}

/// Ten weeks of food and medical demand.
pub fn sample_demand() -> Vec<WeeklySeries> {
    vec![
        WeeklySeries::from_values(
            FOOD_DEMAND,
            &[500.0, 520.0, 540.0, 580.0, 600.0, 620.0, 650.0, 670.0, 700.0, 720.0],
        ),
        WeeklySeries::from_values(
            MEDICAL_DEMAND,
            &[100.0, 105.0, 110.0, 120.0, 125.0, 130.0, 135.0, 140.0, 150.0, 155.0],
        ),
    ]
}
