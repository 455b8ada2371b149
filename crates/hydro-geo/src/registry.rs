//! Country registry: lookup of reference data by case-insensitive key.

use hydro_common::{BoundingBox, HydroError, HydroResult};
use std::collections::HashMap;
use std::path::Path;

use crate::{builtin, Boundary, CountryReference, Locality, RegionDefinition};

/// Read-only reference data for every supported country.
///
/// Built once at startup and shared between requests (wrap in an `Arc`).
/// There are no mutating methods after construction; new countries are added
/// through [`ReferenceData::with_country`] while building.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    countries: HashMap<String, CountryReference>,
}

impl ReferenceData {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in countries (Ghana, Kenya, India).
    pub fn builtin() -> Self {
        builtin::countries()
            .into_iter()
            .fold(Self::new(), |data, (key, country)| data.with_country(key, country))
    }

    /// Register a country under `key`, replacing any previous entry.
    pub fn with_country(mut self, key: &str, country: CountryReference) -> Self {
        self.countries.insert(normalize_key(key), country);
        self
    }

    /// Load one country per `*.yaml` / `*.yml` file in `dir`, keyed by file stem.
    ///
    /// A missing directory falls back to the built-in tables.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> HydroResult<Self> {
        let path = dir.as_ref();

        if !path.exists() {
            tracing::warn!(
                dir = %path.display(),
                "Reference data directory does not exist, using built-in countries"
            );
            return Ok(Self::builtin());
        }

        let mut files: Vec<_> = std::fs::read_dir(path)
            .map_err(|e| HydroError::config(format!("Failed to read {}: {}", path.display(), e)))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();
        files.sort();

        let mut data = Self::new();
        for file_path in files {
            let key = file_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();

            let content = std::fs::read_to_string(&file_path).map_err(|e| {
                HydroError::config(format!("Failed to read {}: {}", file_path.display(), e))
            })?;
            let country: CountryReference = serde_yaml::from_str(&content).map_err(|e| {
                HydroError::config(format!("Failed to parse {}: {}", file_path.display(), e))
            })?;

            if country.boundary.exterior_ring().len() < 3 {
                tracing::warn!(
                    country = %key,
                    "Boundary has fewer than 3 vertices and will contain no points"
                );
            }

            tracing::debug!(
                country = %key,
                localities = country.localities.len(),
                regions = country.regions.len(),
                "Loaded country reference"
            );
            data = data.with_country(&key, country);
        }

        if data.is_empty() {
            tracing::warn!(dir = %path.display(), "No country reference files found");
        } else {
            tracing::info!(
                countries = data.len(),
                dir = %path.display(),
                "Loaded reference data"
            );
        }

        Ok(data)
    }

    /// Full reference record for a country.
    pub fn country(&self, key: &str) -> HydroResult<&CountryReference> {
        self.countries
            .get(&normalize_key(key))
            .ok_or_else(|| HydroError::not_found(format!("country '{}'", key)))
    }

    /// Boundary polygon for a country.
    pub fn boundary(&self, key: &str) -> HydroResult<&Boundary> {
        self.country(key).map(|c| &c.boundary)
    }

    /// Map center as (lat, lon).
    pub fn center(&self, key: &str) -> HydroResult<(f64, f64)> {
        self.country(key).map(CountryReference::center)
    }

    /// Country extent.
    pub fn bounding_box(&self, key: &str) -> HydroResult<BoundingBox> {
        self.country(key).map(|c| c.bbox)
    }

    /// Aggregation regions in definition order.
    pub fn region_definitions(&self, key: &str) -> HydroResult<&[RegionDefinition]> {
        self.country(key).map(|c| c.regions.as_slice())
    }

    /// Labeling localities in definition order.
    pub fn localities(&self, key: &str) -> HydroResult<&[Locality]> {
        self.country(key).map(|c| c.localities.as_slice())
    }

    /// Registered keys, sorted.
    pub fn country_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.countries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Check if a country is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.countries.contains_key(&normalize_key(key))
    }

    /// Number of registered countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Check if no countries are registered.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}
