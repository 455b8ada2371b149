//! Geographic reference data for the anomaly pipeline.
//!
//! Holds everything the pipeline needs to know about a country that does not
//! change between requests:
//! - a simplified boundary polygon for point containment
//! - a center point and bounding box for map framing and grid cropping
//! - named localities used to label grid cells
//! - administrative regions used to bucket extracted points
//!
//! Reference data is built once (from the built-in tables or a directory of
//! YAML files) and then shared read-only between requests.
//!
//! # Example
//!
//! ```rust
//! use hydro_geo::ReferenceData;
//!
//! let reference = ReferenceData::builtin();
//! let (lat, lon) = reference.center("Ghana").unwrap();
//! assert!(lat > 7.0 && lon < 0.0);
//! assert!(reference.boundary("atlantis").is_err());
//! ```

pub mod boundary;
mod builtin;
pub mod country;
pub mod locality;
pub mod region;
pub mod registry;

pub use boundary::{Boundary, BoundaryGeometry};
pub use country::CountryReference;
pub use locality::Locality;
pub use region::{RegionArea, RegionDefinition};
pub use registry::ReferenceData;
