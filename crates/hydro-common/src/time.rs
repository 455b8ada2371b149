//! Date handling for snapshot time series.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::HydroError;

/// Parse an ISO 8601 date.
///
/// Accepts a plain date (`2024-01-15`), an RFC 3339 timestamp, or a naive
/// `YYYY-MM-DDTHH:MM:SS` timestamp. Timestamps keep only their calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, HydroError> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(ndt.date());
    }

    Err(HydroError::InvalidDate(s.to_string()))
}

/// Absolute distance between two dates in days.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}

/// Serde adapter for dates written either as plain dates or timestamps.
///
/// Always serializes as `YYYY-MM-DD`.
pub mod flexible_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_date(&s).map_err(serde::de::Error::custom)
    }
}
