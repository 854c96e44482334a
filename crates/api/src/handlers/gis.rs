//! Handlers for the GeoJSON endpoints.
//!
//! Every response is a standard `FeatureCollection` usable directly by
//! Mapbox, Leaflet, or OpenLayers.

use axum::extract::State;
use axum::Json;
use geofolio_core::models::{
    LocationFeatureCollection, MonglaFeatureCollection, ObservationFeatureCollection,
};
use geofolio_db::repositories::AdminAreaRepo;
use geofolio_inaturalist::InaturalistClient;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /locations
///
/// Point locations from the built-in catalog.
pub async fn get_locations(State(state): State<AppState>) -> Json<LocationFeatureCollection> {
    Json(state.catalog.locations.clone())
}

/// GET /zones
///
/// Polygon zones from the built-in catalog.
pub async fn get_zones(State(state): State<AppState>) -> Json<LocationFeatureCollection> {
    Json(state.catalog.zones.clone())
}

/// GET /mongla-upzila
///
/// Administrative areas from the `mongla_upazila` table, rendered by
/// PostGIS `ST_AsGeoJSON`.
pub async fn get_mongla_upzila(
    State(state): State<AppState>,
) -> AppResult<Json<MonglaFeatureCollection>> {
    let areas = AdminAreaRepo::list(state.pool()?).await?;

    Ok(Json(areas))
}

/// GET /observations
///
/// Recent geotagged iNaturalist observations with observer, quality grade,
/// place, and first photo.
pub async fn get_observations(
    State(state): State<AppState>,
) -> AppResult<Json<ObservationFeatureCollection>> {
    let inat = &state.config.inaturalist;
    let client = InaturalistClient::new(inat.base_url.as_str(), inat.per_page);
    let observations = client.fetch_observations().await?;

    Ok(Json(observations))
}
