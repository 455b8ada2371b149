//! Summary statistics over the valid cells of a grid.

use hydro_common::Grid;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std: f64,
    pub count: usize,
}

impl SnapshotStats {
    /// Compute statistics, ignoring invalid and missing cells.
    ///
    /// Returns None when the grid has no valid cells.
    pub fn from_grid(grid: &Grid) -> Option<Self> {
        Self::from_values(grid.valid_cells().map(|(_, _, v)| v))
    }

    /// Compute statistics over finite values.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        Some(Self {
            mean,
            min,
            max,
            std: variance.sqrt(),
            count: values.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_over_valid_cells() {
        let grid = Grid::from_rows(
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![vec![Some(2.0), None], vec![Some(f64::NAN), Some(4.0)]],
        );
        let stats = SnapshotStats::from_grid(&grid).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 4.0);
        assert!((stats.std - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_stats_empty() {
        let grid = Grid::from_flat(vec![0.0], vec![0.0], vec![None]);
        assert!(SnapshotStats::from_grid(&grid).is_none());
        assert!(SnapshotStats::from_values(Vec::new()).is_none());
    }

    #[test]
    fn test_constant_values_have_zero_std() {
        let stats = SnapshotStats::from_values(vec![0.25; 7]).unwrap();
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.mean, 0.25);
    }
}
