//! Named localities used to label grid cells.

use serde::{Deserialize, Serialize};

/// A named point of interest (usually a city).
///
/// Localities only provide human-readable labels; they never affect which
/// cells are extracted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Locality {
    /// Human-readable name.
    pub name: String,

    /// Latitude in degrees.
    pub lat: f64,

    /// Longitude in degrees.
    pub lon: f64,
}

impl Locality {
    /// Create a new locality.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }
}
