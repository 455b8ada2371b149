//! Common types and utilities shared across the groundwater anomaly crates.

pub mod bbox;
pub mod error;
pub mod grid;
pub mod time;

pub use bbox::BoundingBox;
pub use error::{HydroError, HydroResult};
pub use grid::{Cell, Grid, GridValues};
pub use time::{days_between, parse_date};
