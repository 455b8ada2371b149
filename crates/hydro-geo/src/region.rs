//! Sub-country regions used to bucket extracted points.

use hydro_common::BoundingBox;
use serde::{Deserialize, Serialize};

/// A named area inside a country.
///
/// In YAML a region is written as a name plus exactly one of `bbox` or
/// `polygon`:
///
/// ```yaml
/// - name: Greater Accra
///   bbox: [-0.6, 5.4, 0.7, 6.1]
/// - name: Lake Volta
///   polygon: [[-0.5, 6.2], [0.3, 6.2], [0.1, 8.6], [-1.5, 8.6]]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionDefinition {
    pub name: String,

    #[serde(flatten)]
    pub area: RegionArea,
}

/// The area covered by a region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RegionArea {
    /// Axis-aligned box; membership is inclusive on every edge.
    Bbox(BoundingBox),
    /// Exterior ring of `[lon, lat]` vertices; membership by ray casting.
    Polygon(Vec<[f64; 2]>),
}

impl RegionDefinition {
    /// Create a bounding-box region.
    pub fn bbox(name: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            name: name.into(),
            area: RegionArea::Bbox(bbox),
        }
    }

    /// Create a polygon region.
    pub fn polygon(name: impl Into<String>, ring: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            area: RegionArea::Polygon(ring),
        }
    }
}
