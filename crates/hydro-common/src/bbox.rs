//! Bounding box types and operations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An axis-aligned geographic bounding box in degrees.
///
/// Serialized as `[minLon, minLat, maxLon, maxLat]`, the GeoJSON `bbox`
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Parse a "minLon,minLat,maxLon,maxLat" string.
    pub fn from_bbox_string(s: &str) -> Result<Self, BboxParseError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(BboxParseError::InvalidFormat(s.to_string()));
        }

        let mut coords = [0.0; 4];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| BboxParseError::InvalidNumber(part.to_string()))?;
        }

        let bbox = Self::from(coords);
        if !bbox.is_valid() {
            return Err(BboxParseError::Inverted(s.to_string()));
        }
        Ok(bbox)
    }

    /// Width of the bounding box in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height of the bounding box in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// True when min <= max on both axes.
    pub fn is_valid(&self) -> bool {
        self.min_lon <= self.max_lon && self.min_lat <= self.max_lat
    }

    /// Check if a point lies inside the box. Both intervals are closed.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }

    /// Check if this bbox intersects another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.max_lon < other.min_lon
            || self.min_lon > other.max_lon
            || self.max_lat < other.min_lat
            || self.min_lat > other.max_lat)
    }

    /// Center of the box as (lat, lon).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Smallest box enclosing every `[lon, lat]` vertex, or None for no vertices.
    pub fn enclosing(vertices: &[[f64; 2]]) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;
        let mut bbox = Self::new(first[0], first[1], first[0], first[1]);
        for [lon, lat] in rest {
            bbox.min_lon = bbox.min_lon.min(*lon);
            bbox.min_lat = bbox.min_lat.min(*lat);
            bbox.max_lon = bbox.max_lon.max(*lon);
            bbox.max_lat = bbox.max_lat.max(*lat);
        }
        Some(bbox)
    }

    /// Coordinates in `[minLon, minLat, maxLon, maxLat]` order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BoundingBox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let coords = <[f64; 4]>::deserialize(deserializer)?;
        let bbox = Self::from(coords);
        if !bbox.is_valid() {
            return Err(serde::de::Error::custom(format!(
                "bbox {:?} has min greater than max",
                coords
            )));
        }
        Ok(bbox)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BboxParseError {
    #[error("Invalid bbox format: {0}. Expected 'minLon,minLat,maxLon,maxLat'")]
    InvalidFormat(String),

    #[error("Invalid number in bbox: {0}")]
    InvalidNumber(String),

    #[error("Bbox has min greater than max: {0}")]
    Inverted(String),
}
