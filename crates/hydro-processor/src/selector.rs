//! Pick the snapshot to process from a dated series.

use chrono::NaiveDate;
use hydro_common::{days_between, HydroError, HydroResult};

use crate::types::Snapshot;

/// Select a snapshot by date.
///
/// Without a target the last entry in input order is returned. With a
/// target, the entry closest in days wins; the first one seen wins ties.
pub fn select_snapshot(series: &[Snapshot], target: Option<NaiveDate>) -> HydroResult<&Snapshot> {
    let Some(target) = target else {
        return series
            .last()
            .ok_or_else(|| HydroError::empty_series("series is empty"));
    };

    let mut best: Option<(&Snapshot, i64)> = None;
    for snapshot in series {
        let diff = days_between(snapshot.date, target);
        if best.map_or(true, |(_, best_diff)| diff < best_diff) {
            best = Some((snapshot, diff));
        }
    }

    match best {
        Some((snapshot, diff)) => {
            if diff > 0 {
                tracing::debug!(
                    requested = %target,
                    selected = %snapshot.date,
                    days_off = diff,
                    "No exact date match, using nearest snapshot"
                );
            }
            Ok(snapshot)
        }
        None => Err(HydroError::empty_series("series is empty")),
    }
}
