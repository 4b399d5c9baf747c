//! Geometry productions
//!
//! ```text
//! geometry          := keyword body
//! point             := EMPTY | "(" number number [number] ")"
//! multipoint        := EMPTY | "(" coordinate-list
//! linestring        := EMPTY | "(" coordinate-list
//! multilinestring   := EMPTY | "(" linestring ("," linestring)* ")"
//! polygon           := EMPTY | "(" linestring ("," linestring)* ")"
//! multipolygon      := EMPTY | "(" polygon ("," polygon)* ")"
//! envelope          := EMPTY | "(" number "," number "," number "," number ")"
//! geometrycollection:= EMPTY | "(" geometry ("," geometry)* ")"
//! ```
//!
//! Collections recurse through the dispatcher, which counts nesting on the stream and fails
//! once the stream's maximum depth would be passed.
//!
//! Every production returns `None` for `EMPTY`. Inside multi-geometries, collections and
//! polygon holes an empty member is dropped; a polygon shell cannot be empty.

use super::coordinates::parse_coordinate_list;
use super::error::{ParseError, ParseErrorKind};
use super::terminals::{
    next_closer, next_closer_or_comma, next_comma, next_empty_or_open, next_number, Opening,
    Separator,
};
use crate::wkt::ast::{
    Coordinate, EnvelopeBuilder, GeoShapeType, GeometryCollectionBuilder, LineStringBuilder,
    MultiLineStringBuilder, MultiPointBuilder, MultiPolygonBuilder, Orientation, PointBuilder,
    PolygonBuilder, ShapeBuilder,
};
use crate::wkt::lexer::{Token, TokenStream};

type Production = fn(&mut TokenStream<'_>) -> Result<Option<ShapeBuilder>, ParseError>;

/// Sub-parser for a resolved shape type; `None` for types WKT cannot express
fn production(shape_type: GeoShapeType) -> Option<Production> {
    let production: Production = match shape_type {
        GeoShapeType::Point => |s| Ok(parse_point(s)?.map(ShapeBuilder::from)),
        GeoShapeType::MultiPoint => |s| Ok(parse_multi_point(s)?.map(ShapeBuilder::from)),
        GeoShapeType::LineString => |s| Ok(parse_line(s)?.map(ShapeBuilder::from)),
        GeoShapeType::MultiLineString => |s| Ok(parse_multi_line(s)?.map(ShapeBuilder::from)),
        GeoShapeType::Polygon => |s| Ok(parse_polygon(s)?.map(ShapeBuilder::from)),
        GeoShapeType::MultiPolygon => |s| Ok(parse_multi_polygon(s)?.map(ShapeBuilder::from)),
        GeoShapeType::Envelope => |s| Ok(parse_bbox(s)?.map(ShapeBuilder::from)),
        GeoShapeType::GeometryCollection => {
            |s| Ok(parse_geometry_collection(s)?.map(ShapeBuilder::from))
        }
        GeoShapeType::Circle => return None,
    };
    Some(production)
}

/// Read the leading keyword and hand the body to the matching production
pub(crate) fn parse_geometry(
    stream: &mut TokenStream<'_>,
) -> Result<Option<ShapeBuilder>, ParseError> {
    let keyword = match stream.next_token() {
        Some(Token::Word(word)) => word,
        Some(Token::OpenParen) => "(".to_string(),
        Some(Token::CloseParen) => ")".to_string(),
        Some(Token::Comma) => ",".to_string(),
        Some(Token::Other(_)) | None => {
            return Err(ParseError::expected_or_lexical(
                stream,
                "word",
                ParseErrorKind::Lexical,
            ))
        }
    };

    let unknown = || {
        ParseError::new(
            ParseErrorKind::UnknownGeometryType,
            format!("unknown geometry type [{}]", keyword),
            stream.position(),
        )
    };
    let shape_type = GeoShapeType::for_name(&keyword).ok_or_else(unknown)?;
    let parse_body = production(shape_type).ok_or_else(unknown)?;

    if !stream.enter_nested() {
        return Err(ParseError::new(
            ParseErrorKind::Syntax,
            format!(
                "geometry nesting exceeds the maximum depth of {}",
                stream.max_depth()
            ),
            stream.position(),
        ));
    }
    tracing::trace!(shape_type = %shape_type, line = stream.line(), "parsing geometry");
    let result = parse_body(stream);
    stream.leave_nested();
    result
}

fn parse_point(stream: &mut TokenStream<'_>) -> Result<Option<PointBuilder>, ParseError> {
    if next_empty_or_open(stream)? == Opening::Empty {
        return Ok(None);
    }
    let lon = next_number(stream)?;
    let lat = next_number(stream)?;
    // a third component is read and dropped; points never carry altitude
    if stream.is_word_next() {
        next_number(stream)?;
    }
    next_closer(stream)?;
    Ok(Some(PointBuilder::new(lon, lat)))
}

fn parse_multi_point(
    stream: &mut TokenStream<'_>,
) -> Result<Option<MultiPointBuilder>, ParseError> {
    if next_empty_or_open(stream)? == Opening::Empty {
        return Ok(None);
    }
    Ok(Some(MultiPointBuilder::new(parse_coordinate_list(stream)?)))
}

fn parse_line(stream: &mut TokenStream<'_>) -> Result<Option<LineStringBuilder>, ParseError> {
    if next_empty_or_open(stream)? == Opening::Empty {
        return Ok(None);
    }
    Ok(Some(LineStringBuilder::new(parse_coordinate_list(stream)?)))
}

/// Parse `first ("," next)* ")"` with `element`, dropping empty members
fn parse_members<T>(
    stream: &mut TokenStream<'_>,
    first: Option<T>,
    element: fn(&mut TokenStream<'_>) -> Result<Option<T>, ParseError>,
) -> Result<Vec<T>, ParseError> {
    let mut members: Vec<T> = first.into_iter().collect();
    while next_closer_or_comma(stream)? == Separator::Comma {
        members.extend(element(stream)?);
    }
    Ok(members)
}

fn parse_multi_line(
    stream: &mut TokenStream<'_>,
) -> Result<Option<MultiLineStringBuilder>, ParseError> {
    if next_empty_or_open(stream)? == Opening::Empty {
        return Ok(None);
    }
    let first = parse_line(stream)?;
    let lines = parse_members(stream, first, parse_line)?;
    Ok(Some(MultiLineStringBuilder::new(lines)))
}

fn parse_polygon(stream: &mut TokenStream<'_>) -> Result<Option<PolygonBuilder>, ParseError> {
    if next_empty_or_open(stream)? == Opening::Empty {
        return Ok(None);
    }
    let shell = parse_line(stream)?
        .ok_or_else(|| ParseError::expected(stream, "(", ParseErrorKind::Syntax))?;
    let holes = parse_members(stream, None, parse_line)?;
    Ok(Some(PolygonBuilder::new(shell, holes, Orientation::Right)))
}

fn parse_multi_polygon(
    stream: &mut TokenStream<'_>,
) -> Result<Option<MultiPolygonBuilder>, ParseError> {
    if next_empty_or_open(stream)? == Opening::Empty {
        return Ok(None);
    }
    let first = parse_polygon(stream)?;
    let polygons = parse_members(stream, first, parse_polygon)?;
    Ok(Some(MultiPolygonBuilder::new(polygons)))
}

/// `BBOX (minLon, maxLon, maxLat, minLat)`; the field order is fixed
fn parse_bbox(stream: &mut TokenStream<'_>) -> Result<Option<EnvelopeBuilder>, ParseError> {
    if next_empty_or_open(stream)? == Opening::Empty {
        return Ok(None);
    }
    let min_lon = next_number(stream)?;
    next_comma(stream)?;
    let max_lon = next_number(stream)?;
    next_comma(stream)?;
    let max_lat = next_number(stream)?;
    next_comma(stream)?;
    let min_lat = next_number(stream)?;
    next_closer(stream)?;
    Ok(Some(EnvelopeBuilder::new(
        Coordinate::new(min_lon, max_lat),
        Coordinate::new(max_lon, min_lat),
    )))
}

fn parse_geometry_collection(
    stream: &mut TokenStream<'_>,
) -> Result<Option<GeometryCollectionBuilder>, ParseError> {
    if next_empty_or_open(stream)? == Opening::Empty {
        return Ok(None);
    }
    let first = parse_geometry(stream)?;
    let shapes = parse_members(stream, first, parse_geometry)?;
    Ok(Some(GeometryCollectionBuilder::new(shapes)))
}
