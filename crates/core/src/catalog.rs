//! Built-in profile, locations, and zones served straight from memory.

use crate::error::CoreError;
use crate::geojson::{Point, Polygon, Position};
use crate::models::{LocationFeature, LocationFeatureCollection, LocationProperties, PersonalInfo};

/// Read-only data built once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub personal_info: PersonalInfo,
    pub locations: LocationFeatureCollection,
    pub zones: LocationFeatureCollection,
}

impl Catalog {
    /// Build the built-in catalog. Fails only if a hard-coded geometry is
    /// invalid.
    pub fn builtin() -> Result<Self, CoreError> {
        Ok(Self {
            personal_info: personal_info(),
            locations: locations()?,
            zones: zones()?,
        })
    }
}

fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "John Doe".into(),
        role: "Full Stack GIS Developer".into(),
        bio: "Passionate about building spatial applications and connecting people with places."
            .into(),
        contact_email: "john.doe@example.com".into(),
    }
}

fn properties(name: &str, description: &str, category: &str) -> LocationProperties {
    LocationProperties {
        name: name.into(),
        description: Some(description.into()),
        category: category.into(),
    }
}

fn locations() -> Result<LocationFeatureCollection, CoreError> {
    let features = vec![
        LocationFeature::new(
            Point::new(-74.0060, 40.7128)?,
            properties("New York Office", "Our main headquarters.", "Work"),
        ),
        LocationFeature::new(
            Point::new(-0.1276, 51.5074)?,
            properties("London Branch", "European GIS hub.", "Work"),
        ),
        LocationFeature::new(
            Point::new(-122.4194, 37.7749)?,
            properties("San Francisco Home", "Where I live.", "Home"),
        ),
    ];
    Ok(LocationFeatureCollection::new(features))
}

/// Axis-aligned rectangle as a closed exterior ring, wound from the
/// south-west corner.
fn rectangle(west: f64, south: f64, east: f64, north: f64) -> Result<Polygon, CoreError> {
    let ring = [
        (west, south),
        (west, north),
        (east, north),
        (east, south),
        (west, south),
    ]
    .into_iter()
    .map(|(lon, lat)| Position::new(lon, lat))
    .collect::<Result<Vec<_>, _>>()?;
    Polygon::new(vec![ring])
}

fn zones() -> Result<LocationFeatureCollection, CoreError> {
    let features = vec![
        LocationFeature::new(
            rectangle(-74.02, 40.70, -73.98, 40.72)?,
            properties("Downtown Zone", "Business district area.", "Zone"),
        ),
        LocationFeature::new(
            rectangle(-0.142, 51.501, -0.138, 51.504)?,
            properties("Hyde Park Corner", "Green space in London.", "Park"),
        ),
        LocationFeature::new(
            rectangle(-122.42, 37.77, -122.40, 37.79)?,
            properties("Bay Area Tech Hub", "Innovation zone.", "Zone"),
        ),
    ];
    Ok(LocationFeatureCollection::new(features))
}
