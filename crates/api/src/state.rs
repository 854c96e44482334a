use std::sync::Arc;

use geofolio_core::catalog::Catalog;
use geofolio_db::DbPool;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. `None` when the URL could not even be
    /// parsed at startup.
    pub pool: Option<DbPool>,
    pub config: Arc<ServerConfig>,
    /// Built-in profile, locations, and zones.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// The pool, or [`AppError::DatabaseUnavailable`] if there is none.
    pub fn pool(&self) -> Result<&DbPool, AppError> {
        self.pool.as_ref().ok_or(AppError::DatabaseUnavailable)
    }
}

/// Open the database pool without ever failing startup.
///
/// Tries an eager connection first. If the database is down, falls back to a
/// lazy pool so queries fail per request until it comes up.
pub async fn connect_database(database_url: &str) -> Option<DbPool> {
    match geofolio_db::create_pool(database_url).await {
        Ok(pool) => {
            tracing::info!("Database connection pool created");
            return Some(pool);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
        }
    }

    match geofolio_db::connect_lazy(database_url) {
        Ok(pool) => {
            tracing::warn!("Continuing with a lazy database pool");
            Some(pool)
        }
        Err(e) => {
            tracing::error!(error = %e, "Invalid DATABASE_URL, database endpoints will fail");
            None
        }
    }
}
