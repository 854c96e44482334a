//! Request handlers.
//!
//! Static endpoints read from the in-memory [`Catalog`](geofolio_core::catalog::Catalog);
//! GIS endpoints delegate to `geofolio_db` or `geofolio_inaturalist` and map
//! failures via [`AppError`](crate::error::AppError).

pub mod general;
pub mod gis;
pub mod profile;
