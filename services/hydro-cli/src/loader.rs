//! Input loading. The only I/O in the tool, always under a timeout.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use hydro_geo::ReferenceData;
use hydro_processor::Snapshot;
use tracing::{debug, info};

/// File name the preprocessing step writes for a country.
pub fn series_file_name(country_key: &str) -> String {
    format!("{}_groundwater.json", country_key)
}

/// Read and decode a snapshot series from a JSON file.
pub async fn load_series(path: &Path, timeout: Duration) -> Result<Vec<Snapshot>> {
    let contents = tokio::time::timeout(timeout, tokio::fs::read_to_string(path))
        .await
        .map_err(|_| anyhow!("timed out after {:?} reading {}", timeout, path.display()))?
        .with_context(|| format!("failed to read {}", path.display()))?;

    let series: Vec<Snapshot> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse snapshot series in {}", path.display()))?;

    debug!(path = %path.display(), snapshots = series.len(), "Loaded series");
    Ok(series)
}

/// Load reference data from `dir`, or the built-in tables when no directory
/// is given.
pub async fn load_reference(dir: Option<PathBuf>, timeout: Duration) -> Result<ReferenceData> {
    let Some(dir) = dir else {
        return Ok(ReferenceData::builtin());
    };

    let dir_label = dir.display().to_string();
    let task = tokio::task::spawn_blocking(move || ReferenceData::load_from_dir(&dir));
    let reference = tokio::time::timeout(timeout, task)
        .await
        .map_err(|_| anyhow!("timed out after {:?} loading reference data from {}", timeout, dir_label))?
        .context("reference loader task failed")?
        .with_context(|| format!("failed to load reference data from {}", dir_label))?;

    info!(dir = %dir_label, countries = reference.len(), "Loaded reference data");
    Ok(reference)
}

/// Every registered country with a series file in `data_dir`, sorted by key.
pub async fn discover_series(reference: &ReferenceData, data_dir: &Path) -> Vec<(String, PathBuf)> {
    let mut found = Vec::new();
    for key in reference.country_keys() {
        let path = data_dir.join(series_file_name(key));
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            found.push((key.to_string(), path));
        } else {
            debug!(country = %key, path = %path.display(), "No series file");
        }
    }
    found
}
