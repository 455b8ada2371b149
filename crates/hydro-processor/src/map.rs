//! Map-layer helpers: heatmap triples, color scale and value formatting.

use serde::{Deserialize, Serialize};

use crate::types::Snapshot;

/// Heatmap data for one snapshot. Values stay in raw units (meters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    /// `[lat, lon, value]` for every valid cell, row-major.
    #[serde(rename = "heatmapData")]
    pub heatmap: Vec<[f64; 3]>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl MapData {
    /// Build heatmap data. None when the grid has no axes.
    ///
    /// Precomputed snapshot statistics win over values derived from the grid.
    pub fn from_snapshot(snapshot: &Snapshot) -> Option<Self> {
        let grid = &snapshot.raw_data;
        if grid.lats.is_empty() || grid.lons.is_empty() {
            tracing::warn!(date = %snapshot.date, "Snapshot grid has no axes");
            return None;
        }

        let heatmap: Vec<[f64; 3]> = grid
            .valid_cells()
            .map(|(lat, lon, value)| [lat, lon, value])
            .collect();

        let derived = snapshot.stats();
        let pick = |given: Option<f64>, fallback: Option<f64>| given.filter(|v| v.is_finite()).or(fallback);

        tracing::debug!(
            date = %snapshot.date,
            lats = grid.lat_count(),
            lons = grid.lon_count(),
            cells = heatmap.len(),
            "Generated heatmap data"
        );

        Some(Self {
            heatmap,
            min: pick(snapshot.min, derived.map(|s| s.min)),
            max: pick(snapshot.max, derived.map(|s| s.max)),
            mean: pick(snapshot.mean, derived.map(|s| s.mean)),
        })
    }
}

/// Hex color for an anomaly in meters, dark red through dark green.
pub fn anomaly_color(value_m: f64) -> &'static str {
    const SCALE: [(f64, &str); 7] = [
        (-0.1, "#b91c1c"),
        (-0.05, "#dc2626"),
        (-0.025, "#ef4444"),
        (0.0, "#f59e0b"),
        (0.025, "#fcd34d"),
        (0.05, "#84cc16"),
        (0.1, "#65a30d"),
    ];

    SCALE
        .iter()
        .find(|(cut, _)| value_m < *cut)
        .map(|(_, color)| *color)
        .unwrap_or("#166534")
}

/// Format a meter value as centimeters with one decimal, e.g. "+2.5 cm".
pub fn format_anomaly(value_m: Option<f64>) -> String {
    match value_m {
        Some(v) if v > 0.0 => format!("+{:.1} cm", v * 100.0),
        Some(v) => format!("{:.1} cm", v * 100.0),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hydro_common::Grid;

    fn snapshot(grid: Grid) -> Snapshot {
        Snapshot::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), grid)
    }

    #[test]
    fn test_heatmap_skips_invalid_cells() {
        let grid = Grid::from_rows(
            vec![5.0, 6.0],
            vec![-1.0, 0.0],
            vec![vec![Some(-0.02), None], vec![Some(0.04)]],
        );
        let map = MapData::from_snapshot(&snapshot(grid)).unwrap();
        assert_eq!(map.heatmap, vec![[5.0, -1.0, -0.02], [6.0, -1.0, 0.04]]);
        assert_eq!(map.min, Some(-0.02));
        assert_eq!(map.max, Some(0.04));
    }

    #[test]
    fn test_precomputed_stats_preferred() {
        let grid = Grid::from_flat(vec![0.0], vec![0.0], vec![Some(1.0)]);
        let mut snap = snapshot(grid).with_mean(0.5);
        snap.max = Some(9.0);
        let map = MapData::from_snapshot(&snap).unwrap();
        assert_eq!(map.mean, Some(0.5));
        assert_eq!(map.max, Some(9.0));
        assert_eq!(map.min, Some(1.0));
    }

    #[test]
    fn test_no_axes() {
        let grid = Grid::from_flat(vec![], vec![1.0], vec![]);
        assert!(MapData::from_snapshot(&snapshot(grid)).is_none());
    }

    #[test]
    fn test_serialized_field_name() {
        let grid = Grid::from_flat(vec![0.0], vec![0.0], vec![Some(1.0)]);
        let json = serde_json::to_value(MapData::from_snapshot(&snapshot(grid)).unwrap()).unwrap();
        assert!(json.get("heatmapData").is_some());
    }

    #[test]
    fn test_color_scale() {
        assert_eq!(anomaly_color(-0.2), "#b91c1c");
        assert_eq!(anomaly_color(-0.1), "#dc2626");
        assert_eq!(anomaly_color(-0.01), "#f59e0b");
        assert_eq!(anomaly_color(0.0), "#fcd34d");
        assert_eq!(anomaly_color(0.07), "#65a30d");
        assert_eq!(anomaly_color(0.1), "#166534");
    }

    #[test]
    fn test_format_anomaly() {
        assert_eq!(format_anomaly(Some(0.025)), "+2.5 cm");
        assert_eq!(format_anomaly(Some(-0.1)), "-10.0 cm");
        assert_eq!(format_anomaly(Some(0.0)), "0.0 cm");
        assert_eq!(format_anomaly(None), "N/A");
    }
}
