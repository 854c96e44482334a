//! Size and count queries over geometry tables, used by the diagnostics
//! binaries.

use sqlx::PgPool;

use crate::models::geometry_table::GeometryTable;

pub struct DiagnosticsRepo;

impl DiagnosticsRepo {
    /// Number of rows in `table`.
    pub async fn row_count(pool: &PgPool, table: GeometryTable) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT count(*) FROM {table}");
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }

    /// Average length, in characters, of each row's geometry rendered as
    /// GeoJSON. `None` for an empty table.
    pub async fn avg_geometry_size(
        pool: &PgPool,
        table: GeometryTable,
    ) -> Result<Option<f64>, sqlx::Error> {
        let query = format!("SELECT avg(length(ST_AsGeoJSON(geom)))::float8 FROM {table}");
        sqlx::query_scalar::<_, Option<f64>>(&query)
            .fetch_one(pool)
            .await
    }

    /// Same as [`Self::avg_geometry_size`] after
    /// `ST_SimplifyPreserveTopology(geom, tolerance)`.
    pub async fn avg_simplified_geometry_size(
        pool: &PgPool,
        table: GeometryTable,
        tolerance: f64,
    ) -> Result<Option<f64>, sqlx::Error> {
        let query = format!(
            "SELECT avg(length(ST_AsGeoJSON(ST_SimplifyPreserveTopology(geom, $1))))::float8
             FROM {table}"
        );
        sqlx::query_scalar::<_, Option<f64>>(&query)
            .bind(tolerance)
            .fetch_one(pool)
            .await
    }
}
