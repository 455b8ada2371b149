//! Groundwater anomaly processing.
//!
//! Turns a dated series of decoded anomaly grids into per-country
//! visualization datasets:
//!
//! - **Selection**: pick the snapshot nearest a requested date
//! - **Extraction**: keep the cells inside a country boundary, scale them to
//!   centimeters and label them by nearest locality
//! - **Aggregation**: average extracted points per administrative region
//! - **Classification**: map anomalies and fitted slopes onto trend labels
//!
//! # Architecture
//!
//! ```text
//! Vec<Snapshot>
//!      │
//!      ▼
//! select_snapshot(series, date)
//!      │
//!      ▼
//! extract(grid, boundary, unit_scale, labeler)
//!      │
//!      ├─► is_inside(lat, lon, ring)        (even-odd ray casting)
//!      │
//!      └─► nearest_locality(lat, lon, ..)   (haversine, 200 km cutoff)
//!               │
//!               ▼
//!      aggregate(points, regions) ──► classify(average)
//!               │
//!               ▼
//!          CountryResult
//! ```
//!
//! All of it is synchronous and works on borrowed, immutable inputs, so
//! independent requests can run in parallel against one shared
//! [`hydro_geo::ReferenceData`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use hydro_common::Grid;
//! use hydro_geo::ReferenceData;
//! use hydro_processor::{Processor, ProcessorConfig, Snapshot};
//!
//! let grid = Grid::from_rows(
//!     vec![6.0, 7.0],
//!     vec![-1.5, -1.0],
//!     vec![vec![Some(-0.02), Some(-0.04)], vec![Some(-0.06), Some(-0.08)]],
//! );
//! let series = vec![Snapshot::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), grid)];
//!
//! let processor = Processor::new(Arc::new(ReferenceData::builtin()), ProcessorConfig::default());
//! let result = processor.process_country("ghana", &series, None).unwrap();
//! assert_eq!(result.points.len(), 4);
//! ```

pub mod aggregate;
pub mod config;
pub mod extract;
pub mod locator;
pub mod map;
pub mod pipeline;
pub mod selector;
pub mod stats;
pub mod trend;
pub mod types;

// Re-export commonly used types at crate root
pub use aggregate::{aggregate, overall_average, round_to_tenth};
pub use config::ProcessorConfig;
pub use extract::{extract, Extraction, ExtractionReport, Labeler};
pub use locator::{haversine_km, is_inside, nearest_locality, NearestLocality};
pub use map::{anomaly_color, format_anomaly, MapData};
pub use pipeline::{CountryRequest, Processor};
pub use selector::select_snapshot;
pub use stats::SnapshotStats;
pub use trend::{classify, estimate_trend, AnomalyTrend, SlopeTrend, TrendEstimate, TrendPoint};
pub use types::{CountryResult, ExtractedPoint, RegionSummary, Snapshot};
