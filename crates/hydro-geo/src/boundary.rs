//! Country boundary polygons in GeoJSON Feature form.
//!
//! Boundaries are deliberately coarse: they are used to decide which grid
//! cells belong to a country, not to draw cartographically accurate borders.

use serde::{Deserialize, Serialize};

/// A named boundary polygon, serialized as a GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Boundary {
    /// Always "Feature".
    #[serde(rename = "type")]
    pub feature_type: String,

    /// Feature properties.
    pub properties: BoundaryProperties,

    /// Polygon geometry.
    pub geometry: BoundaryGeometry,
}

/// Properties carried by a boundary feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundaryProperties {
    /// Display name of the bounded area.
    pub name: String,
}

/// GeoJSON geometry types accepted for boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum BoundaryGeometry {
    /// A polygon geometry.
    Polygon {
        /// Array of linear rings (first is exterior, rest are holes).
        /// Each ring is an array of [longitude, latitude] coordinate pairs.
        coordinates: Vec<Vec<[f64; 2]>>,
    },
}

impl Boundary {
    /// Create a boundary from an exterior ring of `[lon, lat]` vertices.
    pub fn polygon(name: impl Into<String>, ring: Vec<[f64; 2]>) -> Self {
        Self {
            feature_type: "Feature".to_string(),
            properties: BoundaryProperties { name: name.into() },
            geometry: BoundaryGeometry::Polygon {
                coordinates: vec![ring],
            },
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.properties.name
    }

    /// The exterior ring, or an empty slice for a polygon without rings.
    ///
    /// Holes are ignored; containment is tested against this ring only.
    pub fn exterior_ring(&self) -> &[[f64; 2]] {
        match &self.geometry {
            BoundaryGeometry::Polygon { coordinates } => {
                coordinates.first().map(Vec::as_slice).unwrap_or(&[])
            }
        }
    }
}
