//! End-to-end country processing.

use std::sync::Arc;

use chrono::NaiveDate;
use hydro_common::{HydroError, HydroResult};
use hydro_geo::ReferenceData;
use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::aggregate::{aggregate, overall_average};
use crate::config::ProcessorConfig;
use crate::extract::{extract, Extraction, Labeler};
use crate::selector::select_snapshot;
use crate::trend::{classify, estimate_trend, TrendEstimate};
use crate::types::{CountryResult, Snapshot};

/// One unit of work for [`Processor::process_many`].
#[derive(Debug, Clone, Copy)]
pub struct CountryRequest<'a> {
    pub country: &'a str,
    pub series: &'a [Snapshot],
    pub target: Option<NaiveDate>,
}

/// Runs the selection, extraction and aggregation pipeline against shared
/// reference data.
#[derive(Debug, Clone)]
pub struct Processor {
    reference: Arc<ReferenceData>,
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(reference: Arc<ReferenceData>, config: ProcessorConfig) -> Self {
        Self { reference, config }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Select a snapshot from `series` and build the country result.
    ///
    /// Unknown countries and empty series fail fast. Grid shape problems are
    /// logged and extraction continues with whatever cells exist.
    #[instrument(skip(self, series), fields(snapshots = series.len()))]
    pub fn process_country(
        &self,
        country: &str,
        series: &[Snapshot],
        target: Option<NaiveDate>,
    ) -> HydroResult<CountryResult> {
        // Lookup before selection so an unknown key is reported as such.
        self.reference.country(country)?;

        let snapshot = select_snapshot(series, target).map_err(|e| match e {
            HydroError::EmptySeries(_) => {
                HydroError::empty_series(format!("no snapshots for {}", country))
            }
            other => other,
        })?;

        self.process_snapshot(country, snapshot)
    }

    /// Build the country result for a single, already selected snapshot.
    pub fn process_snapshot(&self, country: &str, snapshot: &Snapshot) -> HydroResult<CountryResult> {
        let reference = self.reference.country(country)?;

        let labeler = Labeler::new(&reference.localities).with_cutoff(self.config.label_cutoff_km);
        let Extraction { points, report } = extract(
            &snapshot.raw_data,
            &reference.boundary,
            self.config.unit_scale,
            &labeler,
        );

        if let Some(issue) = &report.shape_issue {
            warn!(
                country = %country,
                date = %snapshot.date,
                missing = report.missing_cells,
                error = %issue,
                "Grid shape mismatch, continuing with available cells"
            );
        }

        let average_anomaly = overall_average(&points).unwrap_or_else(|| {
            warn!(country = %country, date = %snapshot.date, "No grid cells inside boundary");
            0.0
        });

        let regions = aggregate(&points, &reference.regions);

        info!(
            country = %country,
            date = %snapshot.date,
            points = points.len(),
            regions = regions.len(),
            average = average_anomaly,
            "Processed country snapshot"
        );

        Ok(CountryResult {
            date: snapshot.date,
            average_anomaly,
            trend: classify(average_anomaly),
            regions,
            points,
        })
    }

    /// Process independent requests in parallel. Results keep request order.
    pub fn process_many(&self, requests: &[CountryRequest<'_>]) -> Vec<HydroResult<CountryResult>> {
        debug!(requests = requests.len(), "Processing batch");

        requests
            .par_iter()
            .map(|req| self.process_country(req.country, req.series, req.target))
            .collect()
    }

    /// Windowed trend over the series, or None when too few snapshots have
    /// a usable mean.
    pub fn forward_trend(&self, series: &[Snapshot]) -> Option<TrendEstimate> {
        match estimate_trend(series, self.config.trend_window) {
            Ok(estimate) => Some(estimate),
            Err(e) => {
                debug!(error = %e, "No trend available");
                None
            }
        }
    }
}
