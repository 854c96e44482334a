use axum::Json;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str =
    "Welcome to my Personal GIS Portfolio API. Visit /docs for more info.";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET /
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}
