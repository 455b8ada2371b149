//! Generators for synthetic anomaly data.
//!
//! Values are in meters, like the decoded grids the pipeline receives.

use chrono::{Months, NaiveDate};
use hydro_common::Grid;
use rand::Rng;

/// Evenly spaced axis from `start` with `count` steps of `step` degrees.
pub fn axis(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Creates a table-shaped grid with predictable values.
///
/// Each cell is `-(row * 0.01 + col * 0.001)`, so every value is distinct
/// and the top-left cell is 0.
///
/// # Example
///
/// ```
/// use test_utils::create_anomaly_grid;
///
/// let grid = create_anomaly_grid(5.0, -1.0, 0.5, 3, 4);
/// assert_eq!(grid.lats, vec![5.0, 5.5, 6.0]);
/// assert_eq!(grid.lon_count(), 4);
/// ```
pub fn create_anomaly_grid(
    lat_start: f64,
    lon_start: f64,
    step: f64,
    lat_count: usize,
    lon_count: usize,
) -> Grid {
    let rows = (0..lat_count)
        .map(|row| {
            (0..lon_count)
                .map(|col| Some(-(row as f64 * 0.01 + col as f64 * 0.001)))
                .collect()
        })
        .collect();

    Grid::from_rows(
        axis(lat_start, step, lat_count),
        axis(lon_start, step, lon_count),
        rows,
    )
}

/// Same layout as [`create_anomaly_grid`] with uniformly random values in
/// `[-0.3, 0.3)` and roughly `missing_fraction` of the cells set to `None`.
pub fn create_random_grid<R: Rng>(
    rng: &mut R,
    lat_start: f64,
    lon_start: f64,
    step: f64,
    lat_count: usize,
    lon_count: usize,
    missing_fraction: f64,
) -> Grid {
    let rows = (0..lat_count)
        .map(|_| {
            (0..lon_count)
                .map(|_| {
                    if rng.gen::<f64>() < missing_fraction {
                        None
                    } else {
                        Some(rng.gen_range(-0.3..0.3))
                    }
                })
                .collect()
        })
        .collect();

    Grid::from_rows(
        axis(lat_start, step, lat_count),
        axis(lon_start, step, lon_count),
        rows,
    )
}

/// Monthly dates starting at `start`.
pub fn monthly_dates(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count)
        .filter_map(|i| start.checked_add_months(Months::new(i as u32)))
        .collect()
}

/// Monthly (date, mean) pairs following `intercept + slope * index`.
pub fn linear_means(start: NaiveDate, count: usize, intercept: f64, slope: f64) -> Vec<(NaiveDate, f64)> {
    monthly_dates(start, count)
        .into_iter()
        .enumerate()
        .map(|(i, date)| (date, intercept + slope * i as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydro_common::Cell;

    #[test]
    fn test_anomaly_grid_values() {
        let grid = create_anomaly_grid(0.0, 0.0, 1.0, 2, 3);
        assert_eq!(grid.cell(0, 0), Cell::Valid(0.0));
        assert_eq!(grid.cell(1, 0), Cell::Valid(-0.01));
        assert_eq!(grid.cell(0, 2), Cell::Valid(-0.002));
        assert!(grid.shape_issue().is_none());
    }

    #[test]
    fn test_random_grid_shape() {
        let mut rng = rand::thread_rng();
        let grid = create_random_grid(&mut rng, 0.0, 0.0, 0.5, 4, 5, 0.5);
        assert_eq!(grid.expected_cells(), 20);
        assert!(grid.shape_issue().is_none());
    }

    #[test]
    fn test_linear_means() {
        let start = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let series = linear_means(start, 12, 1.0, 0.5);
        assert_eq!(series.len(), 12);
        assert_eq!(series[11].0, NaiveDate::from_ymd_opt(2023, 12, 15).unwrap());
        assert_eq!(series[2].1, 2.0);
    }
}
