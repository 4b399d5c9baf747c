//! Shape builders
//!
//! Each builder owns its coordinates and sub-shapes exclusively. [ShapeBuilder] is the
//! tagged union the parser returns; collections nest through it.

use serde::Serialize;

use super::coordinate::Coordinate;
use super::shape_type::GeoShapeType;

/// Ring orientation convention attached to polygon shells.
///
/// WKT carries no orientation, so parsed polygons always use the right-hand rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Counter-clockwise shells, clockwise holes
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointBuilder {
    coordinates: Coordinate,
}

impl PointBuilder {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            coordinates: Coordinate::new(lon, lat),
        }
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinates
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiPointBuilder {
    coordinates: Vec<Coordinate>,
}

impl MultiPointBuilder {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }
}

/// An ordered coordinate list; the order encodes line direction and ring winding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStringBuilder {
    coordinates: Vec<Coordinate>,
}

impl LineStringBuilder {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiLineStringBuilder {
    lines: Vec<LineStringBuilder>,
}

impl MultiLineStringBuilder {
    pub fn new(lines: Vec<LineStringBuilder>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[LineStringBuilder] {
        &self.lines
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolygonBuilder {
    orientation: Orientation,
    shell: LineStringBuilder,
    holes: Vec<LineStringBuilder>,
}

impl PolygonBuilder {
    pub fn new(
        shell: LineStringBuilder,
        holes: Vec<LineStringBuilder>,
        orientation: Orientation,
    ) -> Self {
        Self {
            orientation,
            shell,
            holes,
        }
    }

    pub fn shell(&self) -> &LineStringBuilder {
        &self.shell
    }

    pub fn holes(&self) -> &[LineStringBuilder] {
        &self.holes
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiPolygonBuilder {
    polygons: Vec<PolygonBuilder>,
}

impl MultiPolygonBuilder {
    pub fn new(polygons: Vec<PolygonBuilder>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[PolygonBuilder] {
        &self.polygons
    }
}

/// Axis aligned bounding rectangle given by two opposite corners
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeBuilder {
    top_left: Coordinate,
    bottom_right: Coordinate,
}

impl EnvelopeBuilder {
    pub fn new(top_left: Coordinate, bottom_right: Coordinate) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Corner at (min longitude, max latitude)
    pub fn top_left(&self) -> &Coordinate {
        &self.top_left
    }

    /// Corner at (max longitude, min latitude)
    pub fn bottom_right(&self) -> &Coordinate {
        &self.bottom_right
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryCollectionBuilder {
    shapes: Vec<ShapeBuilder>,
}

impl GeometryCollectionBuilder {
    pub fn new(shapes: Vec<ShapeBuilder>) -> Self {
        Self { shapes }
    }

    pub fn shapes(&self) -> &[ShapeBuilder] {
        &self.shapes
    }
}

/// A parsed geometry, ready for conversion into an indexable shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeBuilder {
    Point(PointBuilder),
    MultiPoint(MultiPointBuilder),
    LineString(LineStringBuilder),
    MultiLineString(MultiLineStringBuilder),
    Polygon(PolygonBuilder),
    MultiPolygon(MultiPolygonBuilder),
    Envelope(EnvelopeBuilder),
    GeometryCollection(GeometryCollectionBuilder),
}

impl ShapeBuilder {
    pub fn shape_type(&self) -> GeoShapeType {
        match self {
            ShapeBuilder::Point(_) => GeoShapeType::Point,
            ShapeBuilder::MultiPoint(_) => GeoShapeType::MultiPoint,
            ShapeBuilder::LineString(_) => GeoShapeType::LineString,
            ShapeBuilder::MultiLineString(_) => GeoShapeType::MultiLineString,
            ShapeBuilder::Polygon(_) => GeoShapeType::Polygon,
            ShapeBuilder::MultiPolygon(_) => GeoShapeType::MultiPolygon,
            ShapeBuilder::Envelope(_) => GeoShapeType::Envelope,
            ShapeBuilder::GeometryCollection(_) => GeoShapeType::GeometryCollection,
        }
    }
}

macro_rules! impl_from_builder {
    ($($builder:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$builder> for ShapeBuilder {
                fn from(builder: $builder) -> Self {
                    ShapeBuilder::$variant(builder)
                }
            }
        )*
    };
}

impl_from_builder!(
    PointBuilder => Point,
    MultiPointBuilder => MultiPoint,
    LineStringBuilder => LineString,
    MultiLineStringBuilder => MultiLineString,
    PolygonBuilder => Polygon,
    MultiPolygonBuilder => MultiPolygon,
    EnvelopeBuilder => Envelope,
    GeometryCollectionBuilder => GeometryCollection,
);
