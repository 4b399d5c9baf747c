//! WKT serialization of shape trees
//!
//! Envelopes are written with the `BBOX` keyword in `minLon, maxLon, maxLat, minLat` order.
//! Containers whose members were all empty are written with an empty member, e.g.
//! `MULTILINESTRING (EMPTY)`, so they read back as present-but-empty rather than as the
//! EMPTY sentinel. Infinite ordinates are written as `Infinity`/`-Infinity`.

use std::fmt::{self, Write};

use crate::wkt::ast::{Coordinate, GeoShapeType, LineStringBuilder, PolygonBuilder, ShapeBuilder};
use crate::wkt::parser::{EMPTY, INFINITY};

/// Serialize a parse result; `None` is written as `GEOMETRYCOLLECTION EMPTY`.
pub fn to_wkt(shape: Option<&ShapeBuilder>) -> String {
    match shape {
        Some(shape) => shape.to_string(),
        None => format!("{} {}", GeoShapeType::GeometryCollection.wkt_name(), EMPTY),
    }
}

/// One ordinate in a form the number reader accepts back
struct Ordinate(f64);

impl fmt::Display for Ordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            v if v == f64::INFINITY => f.write_str(INFINITY),
            v if v == f64::NEG_INFINITY => write!(f, "-{}", INFINITY),
            v => write!(f, "{}", v),
        }
    }
}

fn write_coordinate<W: Write>(out: &mut W, coordinate: &Coordinate) -> fmt::Result {
    write!(
        out,
        "{} {}",
        Ordinate(coordinate.lon()),
        Ordinate(coordinate.lat())
    )?;
    if let Some(alt) = coordinate.alt() {
        write!(out, " {}", Ordinate(alt))?;
    }
    Ok(())
}

fn write_coordinates<W: Write>(out: &mut W, coordinates: &[Coordinate]) -> fmt::Result {
    if coordinates.is_empty() {
        return write!(out, "{}", EMPTY);
    }
    out.write_char('(')?;
    for (i, coordinate) in coordinates.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_coordinate(out, coordinate)?;
    }
    out.write_char(')')
}

/// Write `(a, b, c)` using `item` for each member, or `(<empty>)` when there are none
fn write_members<W: Write, T>(
    out: &mut W,
    members: &[T],
    empty: &str,
    mut item: impl FnMut(&mut W, &T) -> fmt::Result,
) -> fmt::Result {
    out.write_char('(')?;
    if members.is_empty() {
        out.write_str(empty)?;
    }
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        item(out, member)?;
    }
    out.write_char(')')
}

fn write_line<W: Write>(out: &mut W, line: &LineStringBuilder) -> fmt::Result {
    write_coordinates(out, line.coordinates())
}

fn write_polygon<W: Write>(out: &mut W, polygon: &PolygonBuilder) -> fmt::Result {
    out.write_char('(')?;
    write_line(out, polygon.shell())?;
    for hole in polygon.holes() {
        out.write_str(", ")?;
        write_line(out, hole)?;
    }
    out.write_char(')')
}

impl fmt::Display for ShapeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.shape_type().wkt_name())?;
        match self {
            ShapeBuilder::Point(point) => {
                f.write_char('(')?;
                write_coordinate(f, point.coordinate())?;
                f.write_char(')')
            }
            ShapeBuilder::MultiPoint(multi) => write_coordinates(f, multi.coordinates()),
            ShapeBuilder::LineString(line) => write_line(f, line),
            ShapeBuilder::MultiLineString(multi) => {
                write_members(f, multi.lines(), EMPTY, write_line)
            }
            ShapeBuilder::Polygon(polygon) => write_polygon(f, polygon),
            ShapeBuilder::MultiPolygon(multi) => {
                write_members(f, multi.polygons(), EMPTY, write_polygon)
            }
            ShapeBuilder::Envelope(envelope) => write!(
                f,
                "({}, {}, {}, {})",
                Ordinate(envelope.top_left().lon()),
                Ordinate(envelope.bottom_right().lon()),
                Ordinate(envelope.top_left().lat()),
                Ordinate(envelope.bottom_right().lat())
            ),
            ShapeBuilder::GeometryCollection(collection) => {
                let empty_member = format!("{} {}", GeoShapeType::Point.wkt_name(), EMPTY);
                write_members(f, collection.shapes(), &empty_member, |out, shape| {
                    write!(out, "{}", shape)
                })
            }
        }
    }
}
