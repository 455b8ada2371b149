//! Grid extraction: turn a decoded grid into labeled points inside a boundary.

use hydro_common::{BoundingBox, Cell, Grid, HydroError};
use hydro_geo::{Boundary, Locality};

use crate::config::DEFAULT_LABEL_CUTOFF_KM;
use crate::locator::{is_inside, nearest_locality};
use crate::types::ExtractedPoint;

/// Produces human-readable labels for grid cells.
#[derive(Debug, Clone, Copy)]
pub struct Labeler<'a> {
    localities: &'a [Locality],
    cutoff_km: f64,
}

impl<'a> Labeler<'a> {
    /// Label against `localities` with the default 200 km cutoff.
    pub fn new(localities: &'a [Locality]) -> Self {
        Self {
            localities,
            cutoff_km: DEFAULT_LABEL_CUTOFF_KM,
        }
    }

    /// Override the distance cutoff.
    pub fn with_cutoff(mut self, cutoff_km: f64) -> Self {
        self.cutoff_km = cutoff_km;
        self
    }

    /// "{km}km from {name}" for a locality within the cutoff, otherwise
    /// "Location ({lat}, {lon})" with two decimals.
    pub fn label(&self, lat: f64, lon: f64) -> String {
        match nearest_locality(lat, lon, self.localities) {
            Some(nearest) if nearest.distance_km <= self.cutoff_km => {
                format!(
                    "{}km from {}",
                    nearest.distance_km.round() as i64,
                    nearest.locality.name
                )
            }
            _ => coordinate_label(lat, lon),
        }
    }
}

fn coordinate_label(lat: f64, lon: f64) -> String {
    format!("Location ({:.2}, {:.2})", lat, lon)
}

/// Cell accounting for one extraction pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionReport {
    /// Cells addressed by the axes.
    pub expected_cells: usize,
    /// Addressed cells absent from storage.
    pub missing_cells: usize,
    /// Null, NaN or infinite cells.
    pub invalid_cells: usize,
    /// Valid cells outside the boundary.
    pub outside_cells: usize,
    /// Cells emitted as points.
    pub extracted: usize,
    /// Shape mismatch between axes and storage, if any.
    pub shape_issue: Option<HydroError>,
}

/// Output of [`extract`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub points: Vec<ExtractedPoint>,
    pub report: ExtractionReport,
}

/// Extract every valid cell inside `boundary`, scaled by `unit_scale`.
///
/// Cells are visited row-major (latitude index, then longitude index) and
/// points come out in that order. Malformed grids never fail: missing cells
/// are skipped and counted in the report.
pub fn extract(grid: &Grid, boundary: &Boundary, unit_scale: f64, labeler: &Labeler<'_>) -> Extraction {
    let ring = boundary.exterior_ring();
    let ring_bbox = BoundingBox::enclosing(ring);

    let mut report = ExtractionReport {
        expected_cells: grid.expected_cells(),
        shape_issue: grid.shape_issue(),
        ..Default::default()
    };
    let mut points = Vec::new();

    for (i, &lat) in grid.lats.iter().enumerate() {
        for (j, &lon) in grid.lons.iter().enumerate() {
            let raw = match grid.cell(i, j) {
                Cell::Valid(v) => v,
                Cell::Invalid => {
                    report.invalid_cells += 1;
                    continue;
                }
                Cell::Missing => {
                    report.missing_cells += 1;
                    continue;
                }
            };

            // Cheap rejection before ray casting; the ring cannot contain
            // anything outside its own extent.
            let in_extent = ring_bbox.map_or(false, |b| b.contains(lat, lon));
            if !in_extent || !is_inside(lat, lon, ring) {
                report.outside_cells += 1;
                continue;
            }

            points.push(ExtractedPoint {
                lat,
                lng: lon,
                value: raw * unit_scale,
                name: labeler.label(lat, lon),
            });
        }
    }

    report.extracted = points.len();

    tracing::debug!(
        boundary = %boundary.name(),
        expected = report.expected_cells,
        extracted = report.extracted,
        invalid = report.invalid_cells,
        missing = report.missing_cells,
        outside = report.outside_cells,
        "Extracted grid cells"
    );

    Extraction { points, report }
}
