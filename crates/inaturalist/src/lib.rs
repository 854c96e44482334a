//! Client for the public iNaturalist REST API.
//!
//! Fetches recent geotagged observations and reshapes them into a GeoJSON
//! feature collection.

pub mod client;
pub mod observation;

pub use client::{InaturalistClient, InaturalistError, DEFAULT_BASE_URL, DEFAULT_PER_PAGE};
