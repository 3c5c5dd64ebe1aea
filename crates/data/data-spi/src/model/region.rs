//! Region supply snapshot types.

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Current supply state of a single region.
///
/// Counts are signed so that malformed upstream rows survive loading and
/// are rejected by the engine that consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSnapshot {
    /// Region name (unique within a snapshot)
    pub region: String,
    /// Food supply units on hand
    pub food_supplies: i64,
    /// Medical kits on hand
    pub medical_kits: i64,
    /// Shelters available
    pub shelters: i64,
    /// Number of people affected
    pub people_affected: i64,
}

impl RegionSnapshot {
    /// Create a new region snapshot.
    pub fn new(
        region: &str,
        food_supplies: i64,
        medical_kits: i64,
        shelters: i64,
        people_affected: i64,
    ) -> Self {
        Self {
            region: region.to_string(),
            food_supplies,
            medical_kits,
            shelters,
            people_affected,
        }
    }
}

/// Column sums across every region of a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTotals {
    pub food_supplies: i64,
    pub medical_kits: i64,
    pub shelters: i64,
    pub people_affected: i64,
}

impl ResourceTotals {
    /// The three supply budgets in food, medical, shelter order.
    pub fn supply_bounds(&self) -> [i64; 3] {
        [self.food_supplies, self.medical_kits, self.shelters]
    }
}

// Summed in i128 so the result is exact for any row order.
fn checked_sum(
    regions: &[RegionSnapshot],
    column: &str,
    field: fn(&RegionSnapshot) -> i64,
) -> Result<i64> {
    let sum: i128 = regions.iter().map(|r| i128::from(field(r))).sum();
    i64::try_from(sum).map_err(|_| DataError::TotalOverflow {
        column: column.to_string(),
    })
}

/// Sum each resource column across regions.
///
/// Fails with [`DataError::TotalOverflow`] when any column sum leaves the
/// i64 range.
pub fn aggregate_totals(regions: &[RegionSnapshot]) -> Result<ResourceTotals> {
    Ok(ResourceTotals {
        food_supplies: checked_sum(regions, "Food Supplies", |r| r.food_supplies)?,
        medical_kits: checked_sum(regions, "Medical Kits", |r| r.medical_kits)?,
        shelters: checked_sum(regions, "Shelters", |r| r.shelters)?,
        people_affected: checked_sum(regions, "People Affected", |r| r.people_affected)?,
    })
}

/// Collection of region snapshots keyed by unique region name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    regions: Vec<RegionSnapshot>,
}

impl Snapshot {
    /// Build a snapshot, rejecting duplicate region names.
    pub fn new(regions: Vec<RegionSnapshot>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(regions.len());
        for r in &regions {
            if !seen.insert(r.region.as_str()) {
                return Err(DataError::DuplicateRegion(r.region.clone()));
            }
        }
        Ok(Self { regions })
    }

    /// Regions in load order.
    pub fn regions(&self) -> &[RegionSnapshot] {
        &self.regions
    }

    /// Look up a region by name.
    pub fn get(&self, region: &str) -> Option<&RegionSnapshot> {
        self.regions.iter().find(|r| r.region == region)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Aggregated bounds across all regions.
    pub fn totals(&self) -> Result<ResourceTotals> {
        aggregate_totals(&self.regions)
    }
}

impl AsRef<[RegionSnapshot]> for Snapshot {
    fn as_ref(&self) -> &[RegionSnapshot] {
        &self.regions
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            regions: Vec<RegionSnapshot>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Snapshot::new(raw.regions).map_err(serde::de::Error::custom)
    }
}
