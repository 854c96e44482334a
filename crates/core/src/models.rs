//! Property sets and the concrete feature collections built from them.

use serde::{Deserialize, Serialize};

use crate::geojson::{Feature, FeatureCollection};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Developer profile served by `/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub contact_email: String,
}

// ---------------------------------------------------------------------------
// Locations and zones
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationProperties {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
}

pub type LocationFeature = Feature<LocationProperties>;
pub type LocationFeatureCollection = FeatureCollection<LocationProperties>;

// ---------------------------------------------------------------------------
// Administrative areas (`mongla_upazila`)
// ---------------------------------------------------------------------------

/// Name used when a row carries no usable area name.
pub const UNKNOWN_AREA_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonglaProperties {
    pub id: DbId,
    pub name: String,
}

impl MonglaProperties {
    /// Blank or missing names fall back to [`UNKNOWN_AREA_NAME`].
    pub fn new(id: DbId, name: Option<String>) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_AREA_NAME.to_string());
        Self { id, name }
    }
}

pub type MonglaFeature = Feature<MonglaProperties>;
pub type MonglaFeatureCollection = FeatureCollection<MonglaProperties>;

// ---------------------------------------------------------------------------
// iNaturalist observations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationProperties {
    pub id: DbId,
    pub species_guess: Option<String>,
    pub user_login: Option<String>,
    pub place_guess: Option<String>,
    pub quality_grade: Option<String>,
    pub observed_on: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

pub type ObservationFeature = Feature<ObservationProperties>;
pub type ObservationFeatureCollection = FeatureCollection<ObservationProperties>;

// ---------------------------------------------------------------------------
// Bangladesh districts (`bangladesh_level_two`)
// ---------------------------------------------------------------------------

/// District boundary properties. No endpoint serves these yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BangladeshProperties {
    pub id: DbId,
    pub shapename: String,
    pub shapeiso: Option<String>,
    pub shapeid: Option<String>,
    pub shapegroup: Option<String>,
    pub shapetype: Option<String>,
}

pub type BangladeshFeature = Feature<BangladeshProperties>;
pub type BangladeshFeatureCollection = FeatureCollection<BangladeshProperties>;
