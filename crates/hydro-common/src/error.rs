//! Error types for the groundwater anomaly pipeline.

use thiserror::Error;

/// Result type alias using HydroError.
pub type HydroResult<T> = Result<T, HydroError>;

/// Primary error type for pipeline operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HydroError {
    // === Lookup Errors ===
    #[error("Not found: {0}")]
    NotFound(String),

    // === Data Errors ===
    /// Grid dimensions disagree with the stored values. Recoverable:
    /// extraction proceeds and reports this instead of failing.
    #[error("Invalid grid shape: expected {expected} cells, {available} available ({detail})")]
    InvalidShape {
        expected: usize,
        available: usize,
        detail: String,
    },

    #[error("No snapshots available: {0}")]
    EmptySeries(String),

    #[error("Insufficient data: need at least {required} points, got {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // === Infrastructure Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl HydroError {
    /// Create a NotFound error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create an EmptySeries error.
    pub fn empty_series(what: impl Into<String>) -> Self {
        Self::EmptySeries(what.into())
    }

    /// Create a Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the pipeline may continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HydroError::InvalidShape { .. } | HydroError::InsufficientData { .. }
        )
    }

    /// Process exit code for command-line front ends.
    pub fn exit_code(&self) -> i32 {
        match self {
            HydroError::InvalidDate(_) | HydroError::Config(_) => 2,
            HydroError::NotFound(_) | HydroError::EmptySeries(_) => 3,
            HydroError::InvalidShape { .. } | HydroError::InsufficientData { .. } => 4,
            HydroError::Io(_) => 5,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for HydroError {
    fn from(err: std::io::Error) -> Self {
        HydroError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HydroError {
    fn from(err: serde_json::Error) -> Self {
        HydroError::Config(format!("JSON error: {}", err))
    }
}
