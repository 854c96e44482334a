use axum::extract::State;
use axum::Json;
use geofolio_core::models::PersonalInfo;

use crate::state::AppState;

/// GET /me
///
/// Developer profile: name, role, bio, and contact email.
pub async fn get_personal_info(State(state): State<AppState>) -> Json<PersonalInfo> {
    Json(state.catalog.personal_info.clone())
}
