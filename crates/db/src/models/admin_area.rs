//! Administrative area rows from `mongla_upazila`.

use geofolio_core::geojson::Geometry;
use geofolio_core::models::{MonglaFeature, MonglaProperties};
use geofolio_core::types::DbId;
use sqlx::FromRow;

/// A row as selected by `AdminAreaRepo::list`, with the geometry already
/// rendered to GeoJSON text by `ST_AsGeoJSON`.
#[derive(Debug, Clone, FromRow)]
pub struct AdminAreaRow {
    pub id: DbId,
    pub geometry: Option<String>,
    pub adm3_en: Option<String>,
}

impl AdminAreaRow {
    /// Convert to a GeoJSON feature.
    ///
    /// Returns `None` (and logs) when the geometry is NULL or not a valid
    /// Point, Polygon, or MultiPolygon.
    pub fn into_feature(self) -> Option<MonglaFeature> {
        let Some(raw) = self.geometry else {
            tracing::warn!(id = self.id, "Skipping admin area with NULL geometry");
            return None;
        };

        let geometry = match serde_json::from_str::<Geometry>(&raw) {
            Ok(geometry) => geometry,
            Err(e) => {
                tracing::warn!(id = self.id, error = %e, "Skipping admin area with unusable geometry");
                return None;
            }
        };

        Some(MonglaFeature::new(
            geometry,
            MonglaProperties::new(self.id, self.adm3_en),
        ))
    }
}
