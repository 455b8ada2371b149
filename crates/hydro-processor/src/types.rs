//! Core types flowing through the pipeline.

use chrono::NaiveDate;
use hydro_common::time::flexible_date;
use hydro_common::Grid;
use serde::{Deserialize, Serialize};

use crate::stats::SnapshotStats;
use crate::trend::AnomalyTrend;

/// One dated observation of the full grid.
///
/// Matches one element of the preprocessed `<country>_groundwater.json`
/// array. Summary statistics are optional; when absent they are derived from
/// the grid on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,

    pub raw_data: Grid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
}

impl Snapshot {
    /// Create a snapshot without precomputed statistics.
    pub fn new(date: NaiveDate, raw_data: Grid) -> Self {
        Self {
            date,
            raw_data,
            mean: None,
            min: None,
            max: None,
            std: None,
        }
    }

    /// Attach a precomputed mean.
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    /// Mean anomaly in raw units: the precomputed mean when present and
    /// finite, otherwise the mean of the valid grid cells.
    pub fn mean_anomaly(&self) -> Option<f64> {
        self.mean
            .filter(|m| m.is_finite())
            .or_else(|| self.stats().map(|s| s.mean))
    }

    /// Statistics over the valid grid cells.
    pub fn stats(&self) -> Option<SnapshotStats> {
        SnapshotStats::from_grid(&self.raw_data)
    }
}

/// A grid cell that passed extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPoint {
    pub lat: f64,
    /// Longitude. Named `lng` for the map layer.
    pub lng: f64,
    /// Anomaly after unit scaling.
    pub value: f64,
    /// Human-readable label.
    pub name: String,
}

/// Average anomaly of one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub name: String,
    /// Mean anomaly rounded to one decimal place.
    pub anomaly: f64,
}

/// Visualization dataset for one country at one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResult {
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    pub average_anomaly: f64,
    pub trend: AnomalyTrend,
    /// Sorted ascending by anomaly (most depleted first).
    pub regions: Vec<RegionSummary>,
    /// Row-major extraction order.
    pub points: Vec<ExtractedPoint>,
}
