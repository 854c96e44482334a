//! Domain types shared by every Geofolio crate.
//!
//! Holds the GeoJSON geometry/feature model, the property sets attached to
//! each feature family, and the built-in catalog served from memory.

pub mod catalog;
pub mod error;
pub mod geojson;
pub mod models;
pub mod types;
