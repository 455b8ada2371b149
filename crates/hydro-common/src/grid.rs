//! Decoded lat/lon anomaly grids.

use crate::{BoundingBox, HydroError};
use serde::{Deserialize, Deserializer, Serialize};

/// A regular lat/lon grid with one anomaly value per cell.
///
/// Cells are addressed by (latitude index, longitude index). Values may be
/// stored as a table of rows or as a single row-major array; the form is
/// decided once when the grid is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Latitude of each row, in degrees
    pub lats: Vec<f64>,
    /// Longitude of each column, in degrees
    pub lons: Vec<f64>,
    /// Cell values; `None` marks a cell without data
    pub values: GridValues,
}

/// Storage layout of grid values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GridValues {
    /// One row per latitude, each row indexed by longitude. A `None` row was
    /// present in storage but was not an array.
    Grid2D(Vec<Option<Vec<Option<f64>>>>),
    /// Row-major flattened values, indexed by `lat_index * lon_count + lon_index`.
    GridFlat(Vec<Option<f64>>),
}

/// Any array element decides the table layout. Malformed rows and
/// non-numeric cells decode as gaps instead of failing the whole grid.
impl<'de> Deserialize<'de> for GridValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<serde_json::Value>::deserialize(deserializer)?;

        if items.iter().any(serde_json::Value::is_array) {
            let rows = items
                .iter()
                .map(|item| {
                    item.as_array()
                        .map(|row| row.iter().map(serde_json::Value::as_f64).collect())
                })
                .collect();
            Ok(GridValues::Grid2D(rows))
        } else {
            Ok(GridValues::GridFlat(
                items.iter().map(serde_json::Value::as_f64).collect(),
            ))
        }
    }
}

/// State of a single addressed cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// A finite value.
    Valid(f64),
    /// Present in storage but null, non-numeric, NaN or infinite.
    Invalid,
    /// Addressed by the axes but absent from storage.
    Missing,
}

impl Grid {
    /// Create a grid from table-shaped values.
    pub fn from_rows(lats: Vec<f64>, lons: Vec<f64>, rows: Vec<Vec<Option<f64>>>) -> Self {
        Self {
            lats,
            lons,
            values: GridValues::Grid2D(rows.into_iter().map(Some).collect()),
        }
    }

    /// Create a grid from row-major flattened values.
    pub fn from_flat(lats: Vec<f64>, lons: Vec<f64>, values: Vec<Option<f64>>) -> Self {
        Self {
            lats,
            lons,
            values: GridValues::GridFlat(values),
        }
    }

    pub fn lat_count(&self) -> usize {
        self.lats.len()
    }

    pub fn lon_count(&self) -> usize {
        self.lons.len()
    }

    /// Number of cells addressed by the axes.
    pub fn expected_cells(&self) -> usize {
        self.lat_count() * self.lon_count()
    }

    /// Number of addressed cells actually present in storage. Values past
    /// the end of a row or array are not counted.
    pub fn available_cells(&self) -> usize {
        let (ny, nx) = (self.lat_count(), self.lon_count());
        match &self.values {
            GridValues::Grid2D(rows) => rows
                .iter()
                .take(ny)
                .map(|row| row.as_ref().map_or(0, |row| row.len().min(nx)))
                .sum(),
            GridValues::GridFlat(values) => values.len().min(ny * nx),
        }
    }

    /// Look up a cell. Indices outside the axes are reported as missing.
    pub fn cell(&self, lat_index: usize, lon_index: usize) -> Cell {
        if lat_index >= self.lat_count() || lon_index >= self.lon_count() {
            return Cell::Missing;
        }
        let stored = match &self.values {
            GridValues::Grid2D(rows) => rows
                .get(lat_index)
                .and_then(Option::as_ref)
                .and_then(|row| row.get(lon_index)),
            GridValues::GridFlat(values) => values.get(lat_index * self.lon_count() + lon_index),
        };
        match stored {
            None => Cell::Missing,
            Some(Some(v)) if v.is_finite() => Cell::Valid(*v),
            Some(_) => Cell::Invalid,
        }
    }

    /// Describe a shape mismatch between the axes and the stored values.
    ///
    /// Returns None when every addressed cell is present.
    pub fn shape_issue(&self) -> Option<HydroError> {
        let expected = self.expected_cells();
        let available = self.available_cells();
        if available >= expected {
            return None;
        }

        let detail = match &self.values {
            GridValues::Grid2D(rows) => {
                let stored = &rows[..rows.len().min(self.lat_count())];
                let short_rows = stored
                    .iter()
                    .flatten()
                    .filter(|row| row.len() < self.lon_count())
                    .count();
                let missing_rows = stored.iter().filter(|row| row.is_none()).count()
                    + self.lat_count().saturating_sub(rows.len());
                format!(
                    "{} short rows, {} missing rows for {} lons",
                    short_rows,
                    missing_rows,
                    self.lon_count()
                )
            }
            GridValues::GridFlat(values) => format!(
                "flat array holds {} values for {}x{} axes",
                values.len(),
                self.lat_count(),
                self.lon_count()
            ),
        };

        Some(HydroError::InvalidShape {
            expected,
            available,
            detail,
        })
    }

    /// Iterate valid cells as (lat, lon, value) in row-major order.
    pub fn valid_cells(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.lats.iter().enumerate().flat_map(move |(i, &lat)| {
            self.lons
                .iter()
                .enumerate()
                .filter_map(move |(j, &lon)| match self.cell(i, j) {
                    Cell::Valid(v) => Some((lat, lon, v)),
                    _ => None,
                })
        })
    }

    /// Subset the grid to the rows and columns inside `bbox` (inclusive).
    ///
    /// The result is always table-shaped; cells missing from storage become
    /// `None`. Returns None when no row or no column falls inside the box.
    pub fn crop(&self, bbox: &BoundingBox) -> Option<Grid> {
        let lat_idx: Vec<usize> = (0..self.lat_count())
            .filter(|&i| self.lats[i] >= bbox.min_lat && self.lats[i] <= bbox.max_lat)
            .collect();
        let lon_idx: Vec<usize> = (0..self.lon_count())
            .filter(|&j| self.lons[j] >= bbox.min_lon && self.lons[j] <= bbox.max_lon)
            .collect();

        if lat_idx.is_empty() || lon_idx.is_empty() {
            return None;
        }

        let rows = lat_idx
            .iter()
            .map(|&i| {
                lon_idx
                    .iter()
                    .map(|&j| match self.cell(i, j) {
                        Cell::Valid(v) => Some(v),
                        _ => None,
                    })
                    .collect()
            })
            .collect();

        Some(Grid::from_rows(
            lat_idx.iter().map(|&i| self.lats[i]).collect(),
            lon_idx.iter().map(|&j| self.lons[j]).collect(),
            rows,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_2d() -> Grid {
        Grid::from_rows(
            vec![5.0, 6.0],
            vec![-1.0, 0.0],
            vec![vec![Some(-2.0), Some(-4.0)], vec![Some(-6.0), Some(-8.0)]],
        )
    }

    #[test]
    fn test_flat_and_2d_agree() {
        let flat = Grid::from_flat(
            vec![5.0, 6.0],
            vec![-1.0, 0.0],
            vec![Some(-2.0), Some(-4.0), Some(-6.0), Some(-8.0)],
        );
        let table = sample_2d();
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(flat.cell(i, j), table.cell(i, j));
            }
        }
        assert_eq!(flat.cell(1, 0), Cell::Valid(-6.0));
    }

    #[test]
    fn test_deserialize_both_layouts() {
        let table: Grid =
            serde_json::from_str(r#"{"lats":[1.0],"lons":[2.0,3.0],"values":[[0.5,null]]}"#)
                .unwrap();
        assert!(matches!(table.values, GridValues::Grid2D(_)));
        assert_eq!(table.cell(0, 1), Cell::Invalid);

        let flat: Grid =
            serde_json::from_str(r#"{"lats":[1.0],"lons":[2.0,3.0],"values":[0.5,null]}"#)
                .unwrap();
        assert!(matches!(flat.values, GridValues::GridFlat(_)));
        assert_eq!(flat.cell(0, 0), Cell::Valid(0.5));
    }

    #[test]
    fn test_malformed_rows_decode_as_missing() {
        let grid: Grid = serde_json::from_str(
            r#"{"lats":[5.0,6.0,7.0],"lons":[-1.0,0.0],"values":[[-0.02,-0.04],null,"bad"]}"#,
        )
        .unwrap();

        assert_eq!(grid.cell(0, 1), Cell::Valid(-0.04));
        assert_eq!(grid.cell(1, 0), Cell::Missing);
        assert_eq!(grid.cell(2, 1), Cell::Missing);
        assert_eq!(grid.valid_cells().count(), 2);
        match grid.shape_issue() {
            Some(HydroError::InvalidShape {
                expected,
                available,
                detail,
            }) => {
                assert_eq!(expected, 6);
                assert_eq!(available, 2);
                assert!(detail.contains("2 missing rows"), "{}", detail);
            }
            other => panic!("Expected InvalidShape, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_cells_are_invalid() {
        let table: Grid =
            serde_json::from_str(r#"{"lats":[1.0],"lons":[2.0,3.0],"values":[[0.5,"x"]]}"#).unwrap();
        assert_eq!(table.cell(0, 1), Cell::Invalid);

        let flat: Grid =
            serde_json::from_str(r#"{"lats":[1.0],"lons":[2.0,3.0],"values":[null,0.5]}"#).unwrap();
        assert!(matches!(flat.values, GridValues::GridFlat(_)));
        assert_eq!(flat.cell(0, 0), Cell::Invalid);
        assert!(flat.shape_issue().is_none());
    }

    #[test]
    fn test_nan_is_invalid() {
        let grid = Grid::from_flat(vec![0.0], vec![0.0], vec![Some(f64::NAN)]);
        assert_eq!(grid.cell(0, 0), Cell::Invalid);
    }

    #[test]
    fn test_short_row_reports_shape_issue() {
        let grid = Grid::from_rows(
            vec![5.0, 6.0],
            vec![-1.0, 0.0],
            vec![vec![Some(1.0), Some(2.0)], vec![Some(3.0)]],
        );
        assert_eq!(grid.cell(1, 1), Cell::Missing);
        match grid.shape_issue() {
            Some(HydroError::InvalidShape {
                expected, available, ..
            }) => {
                assert_eq!(expected, 4);
                assert_eq!(available, 3);
            }
            other => panic!("Expected InvalidShape, got {:?}", other),
        }
    }

    #[test]
    fn test_long_flat_array_tolerated() {
        let grid = Grid::from_flat(vec![0.0], vec![0.0, 1.0], vec![Some(1.0), Some(2.0), Some(3.0)]);
        assert!(grid.shape_issue().is_none());
        assert_eq!(grid.available_cells(), 2);
    }

    #[test]
    fn test_valid_cells_row_major() {
        let cells: Vec<_> = sample_2d().valid_cells().collect();
        assert_eq!(
            cells,
            vec![(5.0, -1.0, -2.0), (5.0, 0.0, -4.0), (6.0, -1.0, -6.0), (6.0, 0.0, -8.0)]
        );
    }

    #[test]
    fn test_crop() {
        let cropped = sample_2d()
            .crop(&BoundingBox::new(-0.5, 5.5, 0.5, 6.5))
            .unwrap();
        assert_eq!(cropped.lats, vec![6.0]);
        assert_eq!(cropped.lons, vec![0.0]);
        assert_eq!(cropped.cell(0, 0), Cell::Valid(-8.0));

        assert!(sample_2d().crop(&BoundingBox::new(10.0, 10.0, 11.0, 11.0)).is_none());
    }
}
