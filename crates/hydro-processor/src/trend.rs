//! Trend classification and short-horizon slope estimation.

use std::fmt;

use chrono::NaiveDate;
use hydro_common::time::flexible_date;
use hydro_common::{HydroError, HydroResult};
use serde::{Deserialize, Serialize};

use crate::types::Snapshot;

/// Qualitative label for an anomaly in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyTrend {
    #[serde(rename = "Rapidly Increasing")]
    RapidlyIncreasing,
    #[serde(rename = "Increasing")]
    Increasing,
    #[serde(rename = "Slightly Increasing")]
    SlightlyIncreasing,
    #[serde(rename = "Stable")]
    Stable,
    #[serde(rename = "Slightly Decreasing")]
    SlightlyDecreasing,
    #[serde(rename = "Decreasing")]
    Decreasing,
    #[serde(rename = "Rapidly Decreasing")]
    RapidlyDecreasing,
}

impl AnomalyTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyTrend::RapidlyIncreasing => "Rapidly Increasing",
            AnomalyTrend::Increasing => "Increasing",
            AnomalyTrend::SlightlyIncreasing => "Slightly Increasing",
            AnomalyTrend::Stable => "Stable",
            AnomalyTrend::SlightlyDecreasing => "Slightly Decreasing",
            AnomalyTrend::Decreasing => "Decreasing",
            AnomalyTrend::RapidlyDecreasing => "Rapidly Decreasing",
        }
    }

    /// Position on the ladder: 3 for Rapidly Increasing down to -3 for
    /// Rapidly Decreasing.
    pub fn rank(&self) -> i8 {
        match self {
            AnomalyTrend::RapidlyIncreasing => 3,
            AnomalyTrend::Increasing => 2,
            AnomalyTrend::SlightlyIncreasing => 1,
            AnomalyTrend::Stable => 0,
            AnomalyTrend::SlightlyDecreasing => -1,
            AnomalyTrend::Decreasing => -2,
            AnomalyTrend::RapidlyDecreasing => -3,
        }
    }
}

impl fmt::Display for AnomalyTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an anomaly (cm) onto the trend ladder. First match wins.
///
/// NaN is treated as Stable.
pub fn classify(anomaly_cm: f64) -> AnomalyTrend {
    if anomaly_cm > 10.0 {
        AnomalyTrend::RapidlyIncreasing
    } else if anomaly_cm > 5.0 {
        AnomalyTrend::Increasing
    } else if anomaly_cm > 1.0 {
        AnomalyTrend::SlightlyIncreasing
    } else if anomaly_cm >= -1.0 {
        AnomalyTrend::Stable
    } else if anomaly_cm >= -5.0 {
        AnomalyTrend::SlightlyDecreasing
    } else if anomaly_cm >= -10.0 {
        AnomalyTrend::Decreasing
    } else if anomaly_cm < -10.0 {
        AnomalyTrend::RapidlyDecreasing
    } else {
        AnomalyTrend::Stable
    }
}

/// Slopes within this distance of zero count as stable.
pub const SLOPE_THRESHOLD: f64 = 0.001;

/// Direction of a fitted slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlopeTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl SlopeTrend {
    pub fn from_slope(slope: f64) -> Self {
        if slope > SLOPE_THRESHOLD {
            SlopeTrend::Increasing
        } else if slope < -SLOPE_THRESHOLD {
            SlopeTrend::Decreasing
        } else {
            SlopeTrend::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlopeTrend::Increasing => "increasing",
            SlopeTrend::Decreasing => "decreasing",
            SlopeTrend::Stable => "stable",
        }
    }
}

impl fmt::Display for SlopeTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (date, mean) pair used in a trend fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    pub mean: f64,
}

/// Result of a windowed least-squares fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEstimate {
    /// Change in mean anomaly per snapshot step.
    pub slope: f64,
    pub trend: SlopeTrend,
    /// The windowed series, oldest first.
    pub data: Vec<TrendPoint>,
}

/// Fit a line through the most recent `window` snapshots.
///
/// The series is sorted by date (stable), trimmed to its last `window`
/// entries, and each entry's mean anomaly is regressed against its index.
/// Entries without a determinable mean are dropped after windowing.
pub fn estimate_trend(series: &[Snapshot], window: usize) -> HydroResult<TrendEstimate> {
    let mut ordered: Vec<&Snapshot> = series.iter().collect();
    ordered.sort_by_key(|s| s.date);

    let start = ordered.len().saturating_sub(window);
    let data: Vec<TrendPoint> = ordered[start..]
        .iter()
        .filter_map(|s| {
            s.mean_anomaly().map(|mean| TrendPoint {
                date: s.date,
                mean,
            })
        })
        .collect();

    let means: Vec<f64> = data.iter().map(|p| p.mean).collect();
    let slope = least_squares_slope(&means).ok_or(HydroError::InsufficientData {
        required: 2,
        available: means.len(),
    })?;

    tracing::debug!(
        window = window,
        points = data.len(),
        slope = slope,
        "Estimated trend"
    );

    Ok(TrendEstimate {
        slope,
        trend: SlopeTrend::from_slope(slope),
        data,
    })
}

/// Closed-form OLS slope of `values` against their indices.
///
/// None for fewer than two values.
pub fn least_squares_slope(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_x2) = values.iter().enumerate().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sx2), (i, &y)| {
            let x = i as f64;
            (sx + x, sy + y, sxy + x * y, sx2 + x * x)
        },
    );

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    Some((n * sum_xy - sum_x * sum_y) / denominator)
}
