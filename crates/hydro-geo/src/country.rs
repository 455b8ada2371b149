//! Per-country reference record.

use hydro_common::BoundingBox;
use serde::{Deserialize, Serialize};

use crate::{Boundary, Locality, RegionDefinition};

/// Everything the pipeline knows about one country.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryReference {
    /// Display name.
    pub name: String,

    /// Simplified outline used for cell containment.
    pub boundary: Boundary,

    /// Map center as [latitude, longitude].
    pub center: [f64; 2],

    /// Country extent as [minLon, minLat, maxLon, maxLat].
    pub bbox: BoundingBox,

    /// Localities used for labels, in priority order for distance ties.
    #[serde(default)]
    pub localities: Vec<Locality>,

    /// Aggregation regions, in display order for equal anomalies.
    #[serde(default)]
    pub regions: Vec<RegionDefinition>,
}

impl CountryReference {
    /// Center as (lat, lon).
    pub fn center(&self) -> (f64, f64) {
        (self.center[0], self.center[1])
    }
}
