pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{general, gis, profile};
use crate::state::AppState;

/// Build the public route tree.
///
/// ```text
/// GET /                  welcome message
/// GET /me                developer profile
/// GET /locations         point locations (GeoJSON)
/// GET /zones             polygon zones (GeoJSON)
/// GET /mongla-upzila     administrative areas from PostGIS (GeoJSON)
/// GET /observations      iNaturalist observations (GeoJSON)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(general::root))
        .route("/me", get(profile::get_personal_info))
        .route("/locations", get(gis::get_locations))
        .route("/zones", get(gis::get_zones))
        .route("/mongla-upzila", get(gis::get_mongla_upzila))
        .route("/observations", get(gis::get_observations))
}
