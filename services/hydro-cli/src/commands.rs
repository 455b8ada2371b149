//! Subcommand implementations. Each returns the JSON document to print.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use hydro_common::BoundingBox;
use hydro_geo::ReferenceData;
use hydro_processor::{
    anomaly_color, format_anomaly, select_snapshot, CountryRequest, MapData, Processor, Snapshot,
    TrendEstimate,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::loader::{discover_series, load_series};

/// Process one country at the requested (or latest) date.
pub async fn process(
    processor: Arc<Processor>,
    data: &Path,
    country: &str,
    date: Option<NaiveDate>,
    timeout: Duration,
) -> Result<Value> {
    let series = load_series(data, timeout).await?;
    let country = country.to_string();

    let result = tokio::task::spawn_blocking(move || processor.process_country(&country, &series, date))
        .await
        .context("processing task failed")??;

    Ok(serde_json::to_value(result)?)
}

/// Process every country with a series file in `data_dir`.
///
/// Failures are reported per country rather than aborting the batch.
pub async fn batch(
    processor: Arc<Processor>,
    data_dir: &Path,
    date: Option<NaiveDate>,
    timeout: Duration,
) -> Result<Value> {
    let files = discover_series(processor.reference(), data_dir).await;
    info!(countries = files.len(), dir = %data_dir.display(), "Discovered series files");

    let mut loaded: Vec<(String, Vec<Snapshot>)> = Vec::with_capacity(files.len());
    let mut output = BTreeMap::new();
    for (key, path) in files {
        match load_series(&path, timeout).await {
            Ok(series) => loaded.push((key, series)),
            Err(e) => {
                warn!(country = %key, error = %e, "Skipping unreadable series");
                output.insert(key, json!({ "error": format!("{:#}", e) }));
            }
        }
    }

    let results = tokio::task::spawn_blocking(move || {
        let requests: Vec<CountryRequest<'_>> = loaded
            .iter()
            .map(|(key, series)| CountryRequest {
                country: key,
                series,
                target: date,
            })
            .collect();
        let results = processor.process_many(&requests);
        loaded
            .iter()
            .map(|(key, _)| key.clone())
            .zip(results)
            .collect::<Vec<_>>()
    })
    .await
    .context("batch task failed")?;

    for (key, result) in results {
        let value = match result {
            Ok(result) => serde_json::to_value(result)?,
            Err(e) => {
                if e.is_recoverable() {
                    info!(country = %key, error = %e, "Country skipped");
                } else {
                    warn!(country = %key, error = %e, "Country failed");
                }
                json!({ "error": e.to_string() })
            }
        };
        output.insert(key, value);
    }

    Ok(serde_json::to_value(output)?)
}

#[derive(Debug, Serialize)]
struct TrendOutput {
    available: bool,
    #[serde(flatten)]
    estimate: Option<TrendEstimate>,
}

/// Windowed slope over the series.
pub async fn trend(processor: Arc<Processor>, data: &Path, timeout: Duration) -> Result<Value> {
    let series = load_series(data, timeout).await?;
    let estimate = processor.forward_trend(&series);

    if estimate.is_none() {
        warn!(path = %data.display(), "No trend available");
    }

    Ok(serde_json::to_value(TrendOutput {
        available: estimate.is_some(),
        estimate,
    })?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOutput {
    date: String,
    mean_label: String,
    mean_color: Option<&'static str>,
    #[serde(flatten)]
    map: MapData,
}

/// Heatmap data for the selected snapshot, optionally cropped to `crop`.
pub async fn map(
    data: &Path,
    date: Option<NaiveDate>,
    crop: Option<BoundingBox>,
    timeout: Duration,
) -> Result<Value> {
    let series = load_series(data, timeout).await?;
    let selected = select_snapshot(&series, date)?;

    let cropped;
    let snapshot = match crop {
        Some(bbox) => {
            let grid = selected
                .raw_data
                .crop(&bbox)
                .with_context(|| format!("no grid cells inside {:?}", bbox.to_array()))?;
            debug!(
                lats = grid.lat_count(),
                lons = grid.lon_count(),
                "Cropped grid"
            );
            // Precomputed statistics describe the full grid, so drop them.
            cropped = Snapshot::new(selected.date, grid);
            &cropped
        }
        None => selected,
    };

    let map = MapData::from_snapshot(snapshot)
        .with_context(|| format!("snapshot {} has an empty grid", snapshot.date))?;

    Ok(serde_json::to_value(MapOutput {
        date: snapshot.date.format("%Y-%m-%d").to_string(),
        mean_label: format_anomaly(map.mean),
        mean_color: map.mean.map(anomaly_color),
        map,
    })?)
}

/// Registered countries with their framing data.
pub fn countries(reference: &ReferenceData) -> Result<Value> {
    let mut list = Vec::new();
    for key in reference.country_keys() {
        let country = reference.country(key)?;
        list.push(json!({
            "key": key,
            "name": country.name,
            "center": country.center,
            "bbox": country.bbox,
            "localities": country.localities.len(),
            "regions": country.regions.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        }));
    }
    Ok(Value::Array(list))
}
