//! Registry of geo shape types and their names

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Every shape type the engine knows about.
///
/// `Circle` is a known shape type with no WKT encoding; the parser resolves the keyword
/// and then rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoShapeType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    Envelope,
    Circle,
    GeometryCollection,
}

impl GeoShapeType {
    pub const ALL: [GeoShapeType; 9] = [
        GeoShapeType::Point,
        GeoShapeType::MultiPoint,
        GeoShapeType::LineString,
        GeoShapeType::MultiLineString,
        GeoShapeType::Polygon,
        GeoShapeType::MultiPolygon,
        GeoShapeType::Envelope,
        GeoShapeType::Circle,
        GeoShapeType::GeometryCollection,
    ];

    /// Lowercase name used by the engine's shape mappings
    pub fn shape_name(&self) -> &'static str {
        match self {
            GeoShapeType::Point => "point",
            GeoShapeType::MultiPoint => "multipoint",
            GeoShapeType::LineString => "linestring",
            GeoShapeType::MultiLineString => "multilinestring",
            GeoShapeType::Polygon => "polygon",
            GeoShapeType::MultiPolygon => "multipolygon",
            GeoShapeType::Envelope => "envelope",
            GeoShapeType::Circle => "circle",
            GeoShapeType::GeometryCollection => "geometrycollection",
        }
    }

    /// Keyword written in WKT text. Envelopes are written as `BBOX`.
    pub fn wkt_name(&self) -> &'static str {
        match self {
            GeoShapeType::Point => "POINT",
            GeoShapeType::MultiPoint => "MULTIPOINT",
            GeoShapeType::LineString => "LINESTRING",
            GeoShapeType::MultiLineString => "MULTILINESTRING",
            GeoShapeType::Polygon => "POLYGON",
            GeoShapeType::MultiPolygon => "MULTIPOLYGON",
            GeoShapeType::Envelope => "BBOX",
            GeoShapeType::Circle => "CIRCLE",
            GeoShapeType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Resolve a shape name or WKT keyword, ignoring case
    pub fn for_name(name: &str) -> Option<GeoShapeType> {
        SHAPE_TYPES.get(name.to_lowercase().as_str()).copied()
    }
}

static SHAPE_TYPES: Lazy<HashMap<&'static str, GeoShapeType>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, GeoShapeType> = GeoShapeType::ALL
        .iter()
        .map(|ty| (ty.shape_name(), *ty))
        .collect();
    map.insert("bbox", GeoShapeType::Envelope);
    map
});

impl fmt::Display for GeoShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shape_name())
    }
}
