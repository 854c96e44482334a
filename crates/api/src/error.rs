use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use geofolio_inaturalist::InaturalistError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Database failures map to 500 and upstream API failures to 502. Both carry
/// the upstream error text in the response body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A query failed in sqlx.
    #[error("Database query failed: {0}")]
    Database(#[from] sqlx::Error),

    /// The server started without a usable pool.
    #[error("Database query failed: no database connection is configured")]
    DatabaseUnavailable,

    /// iNaturalist could not be reached or answered with an error.
    #[error("Failed to fetch data from iNaturalist: {0}")]
    Upstream(#[from] InaturalistError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Database(_) | AppError::DatabaseUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR")
            }
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
        };

        let message = self.to_string();
        tracing::error!(error = %message, code, "Request failed");

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
