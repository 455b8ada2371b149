//! Configuration for the anomaly processor.

use serde::{Deserialize, Serialize};

/// Raw grids are in meters of liquid water equivalent; output is centimeters.
pub const DEFAULT_UNIT_SCALE: f64 = 100.0;

/// Beyond this distance a cell is labeled by its coordinates instead of a locality.
pub const DEFAULT_LABEL_CUTOFF_KM: f64 = 200.0;

/// Number of most recent snapshots used for the forward-looking trend.
pub const DEFAULT_TREND_WINDOW: usize = 12;

/// Configuration for the anomaly processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Multiplier applied to raw grid values before output.
    pub unit_scale: f64,

    /// Maximum locality distance (km) for a named label.
    pub label_cutoff_km: f64,

    /// Snapshots used by the trend estimator.
    pub trend_window: usize,

    /// Timeout for loading input data, in seconds. Applies to I/O only.
    pub io_timeout_secs: u64,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            unit_scale: DEFAULT_UNIT_SCALE,
            label_cutoff_km: DEFAULT_LABEL_CUTOFF_KM,
            trend_window: DEFAULT_TREND_WINDOW,
            io_timeout_secs: 30,
        }
    }
}

impl ProcessorConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("HYDRO_UNIT_SCALE") {
            if let Ok(scale) = val.parse() {
                config.unit_scale = scale;
            }
        }

        if let Ok(val) = std::env::var("HYDRO_LABEL_CUTOFF_KM") {
            if let Ok(km) = val.parse() {
                config.label_cutoff_km = km;
            }
        }

        if let Ok(val) = std::env::var("HYDRO_TREND_WINDOW") {
            if let Ok(window) = val.parse() {
                config.trend_window = window;
            }
        }

        if let Ok(val) = std::env::var("HYDRO_IO_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                config.io_timeout_secs = secs;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.unit_scale.is_finite() || self.unit_scale == 0.0 {
            return Err("unit_scale must be finite and non-zero".to_string());
        }

        if self.label_cutoff_km.is_nan() || self.label_cutoff_km < 0.0 {
            return Err("label_cutoff_km must be >= 0".to_string());
        }

        if self.trend_window < 2 {
            return Err("trend_window must be >= 2".to_string());
        }

        if self.io_timeout_secs == 0 {
            return Err("io_timeout_secs must be > 0".to_string());
        }

        Ok(())
    }
}
