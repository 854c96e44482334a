//! GeoJSON geometry, feature, and feature-collection types (RFC 7946).
//!
//! Geometries check their structure on construction (ring closure, minimum
//! sizes), and deserialization runs through the same constructors.
//! Coordinates are `[x, y]` or `[x, y, z]`, normally `[longitude, latitude]`.
//! Only [`Position::new`] enforces WGS 84 ranges; positions read from
//! upstream JSON keep whatever coordinate system and dimensions they carry.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A single position: `[x, y]` followed by any extra ordinates (altitude).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<f64>", try_from = "Vec<f64>")]
pub struct Position(Vec<f64>);

impl Position {
    /// Build a WGS 84 `[longitude, latitude]` position, rejecting non-finite
    /// or out-of-range coordinates.
    pub fn new(lon: f64, lat: f64) -> Result<Self, CoreError> {
        let valid = lon.is_finite()
            && lat.is_finite()
            && (-180.0..=180.0).contains(&lon)
            && (-90.0..=90.0).contains(&lat);
        if !valid {
            return Err(CoreError::InvalidCoordinate { lon, lat });
        }
        Ok(Self(vec![lon, lat]))
    }

    pub fn lon(&self) -> f64 {
        self.0[0]
    }

    pub fn lat(&self) -> f64 {
        self.0[1]
    }

    /// Third ordinate, when present.
    pub fn altitude(&self) -> Option<f64> {
        self.0.get(2).copied()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

impl From<Position> for Vec<f64> {
    fn from(p: Position) -> Self {
        p.0
    }
}

/// Accepts any array of at least two numbers, unchanged. No range check:
/// projected coordinates and altitudes pass through as-is.
impl TryFrom<Vec<f64>> for Position {
    type Error = CoreError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        if values.len() < 2 {
            return Err(CoreError::ShortPosition(values.len()));
        }
        Ok(Self(values))
    }
}

// ---------------------------------------------------------------------------
// Geometries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub coordinates: Position,
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Result<Self, CoreError> {
        Ok(Self {
            coordinates: Position::new(lon, lat)?,
        })
    }
}

/// A polygon as a list of linear rings. The first ring is the exterior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPolygon")]
pub struct Polygon {
    coordinates: Vec<Vec<Position>>,
}

#[derive(Deserialize)]
struct RawPolygon {
    coordinates: Vec<Vec<Position>>,
}

impl Polygon {
    /// Build a polygon. Requires at least one ring, and every ring must be
    /// closed with at least four positions.
    pub fn new(rings: Vec<Vec<Position>>) -> Result<Self, CoreError> {
        validate_rings(&rings)?;
        Ok(Self { coordinates: rings })
    }

    pub fn rings(&self) -> &[Vec<Position>] {
        &self.coordinates
    }

    pub fn exterior(&self) -> &[Position] {
        &self.coordinates[0]
    }
}

impl TryFrom<RawPolygon> for Polygon {
    type Error = CoreError;

    fn try_from(raw: RawPolygon) -> Result<Self, Self::Error> {
        Polygon::new(raw.coordinates)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMultiPolygon")]
pub struct MultiPolygon {
    coordinates: Vec<Vec<Vec<Position>>>,
}

#[derive(Deserialize)]
struct RawMultiPolygon {
    coordinates: Vec<Vec<Vec<Position>>>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Vec<Vec<Position>>>) -> Result<Self, CoreError> {
        if polygons.is_empty() {
            return Err(CoreError::EmptyGeometry("MultiPolygon"));
        }
        for rings in &polygons {
            validate_rings(rings)?;
        }
        Ok(Self {
            coordinates: polygons,
        })
    }

    pub fn polygons(&self) -> &[Vec<Vec<Position>>] {
        &self.coordinates
    }
}

impl TryFrom<RawMultiPolygon> for MultiPolygon {
    type Error = CoreError;

    fn try_from(raw: RawMultiPolygon) -> Result<Self, Self::Error> {
        MultiPolygon::new(raw.coordinates)
    }
}

fn validate_rings(rings: &[Vec<Position>]) -> Result<(), CoreError> {
    if rings.is_empty() {
        return Err(CoreError::EmptyGeometry("Polygon"));
    }
    for ring in rings {
        if ring.len() < 4 {
            return Err(CoreError::RingTooShort(ring.len()));
        }
        if ring.first() != ring.last() {
            return Err(CoreError::RingNotClosed);
        }
    }
    Ok(())
}

/// Any geometry a feature in this API may carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point(Point),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    /// The GeoJSON `type` member for this geometry.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }
}

impl From<Point> for Geometry {
    fn from(p: Point) -> Self {
        Geometry::Point(p)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Geometry::Polygon(p)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(p: MultiPolygon) -> Self {
        Geometry::MultiPolygon(p)
    }
}

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

/// A geometry paired with a typed property set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature<P> {
    pub geometry: Geometry,
    pub properties: P,
}

impl<P> Feature<P> {
    pub fn new(geometry: impl Into<Geometry>, properties: P) -> Self {
        Self {
            geometry: geometry.into(),
            properties,
        }
    }
}

/// An ordered list of features sharing one property schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection<P> {
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    pub fn new(features: Vec<Feature<P>>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<P> FromIterator<Feature<P>> for FeatureCollection<P> {
    fn from_iter<I: IntoIterator<Item = Feature<P>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
