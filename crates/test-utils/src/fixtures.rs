//! Common test fixtures for groundwater anomaly tests.
//!
//! This module provides pre-defined reference data and grids that represent
//! common scenarios in anomaly processing.

use hydro_common::{BoundingBox, Grid};
use hydro_geo::{Boundary, CountryReference, Locality, ReferenceData, RegionDefinition};

/// Common bounding box definitions for testing, as
/// (min_lon, min_lat, max_lon, max_lat).
pub mod bbox {
    /// Ghana country extent
    pub const GHANA: (f64, f64, f64, f64) = (-3.5, 4.5, 1.5, 11.5);

    /// Kenya country extent (straddles the equator)
    pub const KENYA: (f64, f64, f64, f64) = (33.5, -5.0, 42.0, 5.0);

    /// India country extent
    pub const INDIA: (f64, f64, f64, f64) = (68.0, 6.0, 98.0, 38.0);

    /// Covers the four cells of the sample grid exactly
    pub const SAMPLE: (f64, f64, f64, f64) = (-1.0, 5.0, 0.0, 6.0);
}

/// Key under which [`test_reference`] registers [`test_country`].
pub const TEST_COUNTRY_KEY: &str = "testland";

/// The 2 x 2 grid used throughout the docs: lats [5, 6], lons [-1, 0],
/// values [[-2, -4], [-6, -8]].
pub fn sample_grid() -> Grid {
    Grid::from_rows(
        vec![5.0, 6.0],
        vec![-1.0, 0.0],
        vec![vec![Some(-2.0), Some(-4.0)], vec![Some(-6.0), Some(-8.0)]],
    )
}

/// Same cells as [`sample_grid`] in flat row-major storage.
pub fn sample_grid_flat() -> Grid {
    Grid::from_flat(
        vec![5.0, 6.0],
        vec![-1.0, 0.0],
        vec![Some(-2.0), Some(-4.0), Some(-6.0), Some(-8.0)],
    )
}

/// Closed square ring, `[lon, lat]` vertices, first vertex repeated.
pub fn square_ring(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Vec<[f64; 2]> {
    vec![
        [min_lon, min_lat],
        [max_lon, min_lat],
        [max_lon, max_lat],
        [min_lon, max_lat],
        [min_lon, min_lat],
    ]
}

/// Boundary enclosing every cell of [`sample_grid`] with room to spare.
pub fn sample_boundary() -> Boundary {
    Boundary::polygon("Testland", square_ring(-2.0, 4.0, 1.0, 7.0))
}

/// A concave (U-shaped, open to the north) ring spanning 0..3 on both axes.
pub fn notched_ring() -> Vec<[f64; 2]> {
    vec![
        [0.0, 0.0],
        [3.0, 0.0],
        [3.0, 3.0],
        [2.0, 3.0],
        [2.0, 1.0],
        [1.0, 1.0],
        [1.0, 3.0],
        [0.0, 3.0],
    ]
}

/// Country wrapping [`sample_grid`] with one covering region and two
/// localities.
pub fn test_country() -> CountryReference {
    let (min_lon, min_lat, max_lon, max_lat) = bbox::SAMPLE;
    CountryReference {
        name: "Testland".to_string(),
        boundary: sample_boundary(),
        center: [5.5, -0.5],
        bbox: BoundingBox::new(-2.0, 4.0, 1.0, 7.0),
        localities: vec![
            Locality::new("Southville", 5.0, -1.0),
            Locality::new("Northtown", 6.0, 0.0),
        ],
        regions: vec![
            RegionDefinition::bbox("All", BoundingBox::new(min_lon, min_lat, max_lon, max_lat)),
            RegionDefinition::bbox("South", BoundingBox::new(-1.0, 5.0, 0.0, 5.0)),
            RegionDefinition::bbox("Far Away", BoundingBox::new(40.0, 40.0, 41.0, 41.0)),
        ],
    }
}

/// Reference data holding only [`test_country`].
pub fn test_reference() -> ReferenceData {
    ReferenceData::new().with_country(TEST_COUNTRY_KEY, test_country())
}
