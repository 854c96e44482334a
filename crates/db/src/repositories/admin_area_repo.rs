//! Repository for the `mongla_upazila` table.

use geofolio_core::models::MonglaFeatureCollection;
use sqlx::PgPool;

use crate::models::admin_area::AdminAreaRow;

/// Reads administrative area boundaries as GeoJSON.
pub struct AdminAreaRepo;

impl AdminAreaRepo {
    /// List every area as a feature, ordered by id.
    ///
    /// Rows whose geometry cannot be used are left out of the collection.
    pub async fn list(pool: &PgPool) -> Result<MonglaFeatureCollection, sqlx::Error> {
        let rows = sqlx::query_as::<_, AdminAreaRow>(
            "SELECT id::bigint AS id, ST_AsGeoJSON(geom) AS geometry, adm3_en
             FROM mongla_upazila
             ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        let total = rows.len();
        let collection: MonglaFeatureCollection =
            rows.into_iter().filter_map(AdminAreaRow::into_feature).collect();
        tracing::debug!(total, kept = collection.len(), "Loaded admin areas");

        Ok(collection)
    }
}
