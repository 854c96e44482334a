//! Mapping from raw iNaturalist observation records to GeoJSON features.

use geofolio_core::geojson::Point;
use geofolio_core::models::{
    ObservationFeature, ObservationFeatureCollection, ObservationProperties,
};
use geofolio_core::types::DbId;
use serde::{Deserialize, Deserializer};

const UNKNOWN_SPECIES: &str = "Unknown Species";
const UNKNOWN_PLACE: &str = "Unknown Location";
const UNKNOWN_USER: &str = "unknown";
const DEFAULT_QUALITY_GRADE: &str = "casual";

/// The subset of an observation record this API reads.
///
/// Every field is optional; missing data is defaulted or causes the record
/// to be dropped, never an error.
///
/// The defaulted text fields are `Option<Option<_>>`: the outer `None` means
/// the key was absent, `Some(None)` an explicit `null`. Only absent keys get
/// a default.
#[derive(Debug, Default, Deserialize)]
pub struct RawObservation {
    pub id: Option<DbId>,
    pub latitude: Option<Coordinate>,
    pub longitude: Option<Coordinate>,
    #[serde(default, deserialize_with = "present")]
    pub species_guess: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub user_login: Option<Option<String>>,
    pub user: Option<RawUser>,
    #[serde(default, deserialize_with = "present")]
    pub place_guess: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub quality_grade: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub observed_on: Option<Option<String>>,
    pub description: Option<String>,
    pub photos: Option<Vec<RawPhoto>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawUser {
    pub login: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPhoto {
    pub medium_url: Option<String>,
}

/// Marks a key as present, so `null` decodes to `Some(None)` instead of the
/// field default.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Latitude/longitude as sent by the API: a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Coordinate::Number(n) => Some(*n),
            Coordinate::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl RawObservation {
    /// Build a point feature, or `None` if the record has no id or no
    /// usable coordinates.
    pub fn into_feature(self) -> Option<ObservationFeature> {
        let id = self.id?;
        let lon = self.longitude.as_ref().and_then(Coordinate::as_f64)?;
        let lat = self.latitude.as_ref().and_then(Coordinate::as_f64)?;
        let point = match Point::new(lon, lat) {
            Ok(point) => point,
            Err(e) => {
                tracing::warn!(id, error = %e, "Skipping observation with invalid coordinates");
                return None;
            }
        };

        let image_url = self
            .photos
            .and_then(|photos| photos.into_iter().next())
            .and_then(|photo| photo.medium_url);

        // Older payloads flatten the observer login; newer ones nest it.
        let user_login = self.user_login.unwrap_or_else(|| {
            Some(
                self.user
                    .and_then(|u| u.login)
                    .unwrap_or_else(|| UNKNOWN_USER.to_string()),
            )
        });

        let properties = ObservationProperties {
            id,
            species_guess: or_default(self.species_guess, UNKNOWN_SPECIES),
            user_login,
            place_guess: or_default(self.place_guess, UNKNOWN_PLACE),
            quality_grade: or_default(self.quality_grade, DEFAULT_QUALITY_GRADE),
            observed_on: or_default(self.observed_on, ""),
            image_url,
            description: self.description,
        };

        Some(ObservationFeature::new(point, properties))
    }
}

fn or_default(field: Option<Option<String>>, default: &str) -> Option<String> {
    field.unwrap_or_else(|| Some(default.to_string()))
}

/// Convert a page of raw JSON elements into a feature collection, dropping
/// elements that do not decode or lack coordinates.
pub fn collect_features(elements: Vec<serde_json::Value>) -> ObservationFeatureCollection {
    elements
        .into_iter()
        .filter_map(|element| match serde_json::from_value::<RawObservation>(element) {
            Ok(raw) => raw.into_feature(),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping undecodable observation");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geofolio_core::geojson::Geometry;
    use serde_json::json;

    use super::*;

    fn full_record() -> serde_json::Value {
        json!({
            "id": 101,
            "latitude": "22.4712",
            "longitude": "89.5951",
            "species_guess": "Bengal Tiger",
            "user_login": "ranger",
            "place_guess": "Sundarbans",
            "quality_grade": "research",
            "observed_on": "2024-03-01",
            "description": "Tracks near the river",
            "photos": [
                { "medium_url": "https://example.org/medium/1.jpg" },
                { "medium_url": "https://example.org/medium/2.jpg" }
            ]
        })
    }

    #[test]
    fn full_record_maps_all_fields() {
        let collection = collect_features(vec![full_record()]);
        let feature = &collection.features[0];

        assert_matches!(&feature.geometry, Geometry::Point(p)
            if p.coordinates.lon() == 89.5951 && p.coordinates.lat() == 22.4712);
        let props = &feature.properties;
        assert_eq!(props.id, 101);
        assert_eq!(props.species_guess.as_deref(), Some("Bengal Tiger"));
        assert_eq!(props.user_login.as_deref(), Some("ranger"));
        assert_eq!(props.place_guess.as_deref(), Some("Sundarbans"));
        assert_eq!(props.quality_grade.as_deref(), Some("research"));
        assert_eq!(props.observed_on.as_deref(), Some("2024-03-01"));
        assert_eq!(
            props.image_url.as_deref(),
            Some("https://example.org/medium/1.jpg")
        );
        assert_eq!(props.description.as_deref(), Some("Tracks near the river"));
    }

    #[test]
    fn numeric_coordinates_are_accepted() {
        let collection = collect_features(vec![json!({
            "id": 1, "latitude": 40.7, "longitude": -74.0
        })]);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn missing_fields_get_defaults() {
        let collection = collect_features(vec![json!({
            "id": 2, "latitude": 1.0, "longitude": 2.0
        })]);
        let props = &collection.features[0].properties;

        assert_eq!(props.species_guess.as_deref(), Some("Unknown Species"));
        assert_eq!(props.user_login.as_deref(), Some("unknown"));
        assert_eq!(props.place_guess.as_deref(), Some("Unknown Location"));
        assert_eq!(props.quality_grade.as_deref(), Some("casual"));
        assert_eq!(props.observed_on.as_deref(), Some(""));
        assert_eq!(props.image_url, None);
        assert_eq!(props.description, None);
    }

    #[test]
    fn explicit_nulls_stay_null() {
        let collection = collect_features(vec![json!({
            "id": 9, "latitude": 1.0, "longitude": 2.0,
            "species_guess": null,
            "user_login": null,
            "user": { "login": "shadowed" },
            "place_guess": null,
            "quality_grade": null,
            "observed_on": null
        })]);
        let props = &collection.features[0].properties;

        assert_eq!(props.species_guess, None);
        assert_eq!(props.user_login, None);
        assert_eq!(props.place_guess, None);
        assert_eq!(props.quality_grade, None);
        assert_eq!(props.observed_on, None);

        let value = serde_json::to_value(props).unwrap();
        assert_eq!(value["species_guess"], serde_json::Value::Null);
    }

    #[test]
    fn nested_user_login_is_used() {
        let collection = collect_features(vec![json!({
            "id": 3, "latitude": 1.0, "longitude": 2.0,
            "user": { "login": "naturalist42" }
        })]);
        assert_eq!(
            collection.features[0].properties.user_login.as_deref(),
            Some("naturalist42")
        );
    }

    #[test]
    fn empty_photo_list_has_no_image() {
        let collection = collect_features(vec![json!({
            "id": 4, "latitude": 1.0, "longitude": 2.0, "photos": []
        })]);
        assert_eq!(collection.features[0].properties.image_url, None);
    }

    #[test]
    fn records_without_coordinates_are_dropped() {
        let collection = collect_features(vec![
            json!({ "id": 5, "latitude": null, "longitude": 2.0 }),
            json!({ "id": 6, "latitude": 1.0 }),
            json!({ "id": 7, "latitude": "north", "longitude": "east" }),
            json!({ "id": 8, "latitude": 95.0, "longitude": 2.0 }),
            json!({ "latitude": 1.0, "longitude": 2.0 }),
            json!("not an object"),
            full_record(),
        ]);

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.features[0].properties.id, 101);
    }
}
