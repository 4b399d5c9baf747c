//! Integration tests for the WKT parser
//!
//! Covers the documented example geometries, the error contract, and the sample files
//! under docs/samples.

use geowkt::wkt::ast::{
    Coordinate, EnvelopeBuilder, GeoShapeType, LineStringBuilder, Orientation, PointBuilder,
    ShapeBuilder,
};
use geowkt::wkt::formats::to_wkt;
use geowkt::wkt::parser::{
    parse, parse_with_max_depth, ParseError, ParseErrorKind, DEFAULT_MAX_DEPTH,
};
use geowkt::wkt::processor::wkt_sources::WktSources;
use rstest::rstest;

fn shape(text: &str) -> ShapeBuilder {
    parse(text)
        .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", text, e))
        .unwrap_or_else(|| panic!("{:?} parsed as EMPTY", text))
}

fn error(text: &str) -> ParseError {
    match parse(text) {
        Ok(shape) => panic!("{:?} parsed as {:?}", text, shape),
        Err(e) => e,
    }
}

fn coords(points: &[(f64, f64)]) -> Vec<Coordinate> {
    points
        .iter()
        .map(|(lon, lat)| Coordinate::new(*lon, *lat))
        .collect()
}

#[rstest]
#[case("POINT EMPTY")]
#[case("point empty")]
#[case("MULTIPOINT EMPTY")]
#[case("LINESTRING EMPTY")]
#[case("MULTILINESTRING EMPTY")]
#[case("POLYGON EMPTY")]
#[case("MULTIPOLYGON EMPTY")]
#[case("BBOX EMPTY")]
#[case("ENVELOPE EMPTY")]
#[case("GEOMETRYCOLLECTION EMPTY")]
#[case("  POINT\n\tEmPtY  # nothing here")]
fn empty_geometries_are_absent(#[case] text: &str) {
    assert_eq!(parse(text).unwrap(), None);
}

#[test]
fn point() {
    assert_eq!(
        shape("POINT (30 10)"),
        ShapeBuilder::from(PointBuilder::new(30.0, 10.0))
    );
}

#[test]
fn linestring_keeps_order() {
    assert_eq!(
        shape("LINESTRING (30 10, 10 30, 40 40)"),
        ShapeBuilder::from(LineStringBuilder::new(coords(&[
            (30.0, 10.0),
            (10.0, 30.0),
            (40.0, 40.0)
        ])))
    );
}

#[test]
fn polygon_with_hole() {
    let polygon = match shape(
        "POLYGON ((35 10, 45 45, 15 40, 10 20, 35 10), (20 30, 35 35, 30 20, 20 30))",
    ) {
        ShapeBuilder::Polygon(polygon) => polygon,
        other => panic!("expected polygon, got {:?}", other),
    };

    let shell = polygon.shell().coordinates();
    assert_eq!(shell.len(), 5);
    assert_eq!(shell.first(), shell.last());

    assert_eq!(polygon.holes().len(), 1);
    let hole = polygon.holes()[0].coordinates();
    assert_eq!(hole.len(), 4);
    assert_eq!(hole.first(), hole.last());

    assert_eq!(polygon.orientation(), Orientation::Right);
}

#[test]
fn geometry_collection_keeps_order() {
    let collection = match shape("GEOMETRYCOLLECTION (POINT (10 10), LINESTRING (10 10, 20 20))")
    {
        ShapeBuilder::GeometryCollection(collection) => collection,
        other => panic!("expected collection, got {:?}", other),
    };
    let types: Vec<GeoShapeType> = collection.shapes().iter().map(|s| s.shape_type()).collect();
    assert_eq!(types, vec![GeoShapeType::Point, GeoShapeType::LineString]);
}

#[rstest]
#[case("BBOX (-10, 10, 10, -10)")]
#[case("ENVELOPE (-10, 10, 10, -10)")]
#[case("bbox(-10,10,10,-10)")]
fn envelope_field_order(#[case] text: &str) {
    assert_eq!(
        shape(text),
        ShapeBuilder::from(EnvelopeBuilder::new(
            Coordinate::new(-10.0, 10.0),
            Coordinate::new(10.0, -10.0),
        ))
    );
}

#[test]
fn missing_closer_reports_line() {
    let err = error("POINT (10 10");
    assert_eq!(err.kind(), ParseErrorKind::Syntax);
    assert!(err.message().contains(')'), "{}", err);
    assert_eq!(err.line(), 1);

    let err = error("POINT (\n10\n10\n");
    assert_eq!(err.kind(), ParseErrorKind::Syntax);
    assert_eq!(err.message(), "expected ) but found: END-OF-STREAM");
    assert_eq!(err.line(), 4);

    let err = error("LINESTRING (1 1,\n 2 2\n 3 3)");
    assert_eq!(err.message(), "expected , or ) but found: 3");
    assert_eq!(err.line(), 3);
}

#[rstest]
#[case("POINT (1 2) X", "X")]
#[case("POINT (1 2))", "')'")]
#[case("POINT EMPTY POINT EMPTY", "POINT")]
#[case("LINESTRING (1 1, 2 2) ;", "';'")]
fn trailing_text_rejected(#[case] text: &str, #[case] found: &str) {
    let err = error(text);
    assert_eq!(err.kind(), ParseErrorKind::Syntax);
    assert_eq!(
        err.message(),
        format!("expected end of WKT string but found additional text: {}", found)
    );
}

#[rstest]
#[case("", ParseErrorKind::Lexical, "expected word but found: END-OF-STREAM")]
#[case("# only a comment", ParseErrorKind::Lexical, "expected word but found: END-OF-STREAM")]
#[case(";POINT (1 2)", ParseErrorKind::Lexical, "expected word but found: ';'")]
#[case("TRIANGLE (1 2)", ParseErrorKind::UnknownGeometryType, "unknown geometry type [TRIANGLE]")]
#[case("CIRCLE (1 2, 3)", ParseErrorKind::UnknownGeometryType, "unknown geometry type [CIRCLE]")]
#[case("POINT 1 2", ParseErrorKind::Syntax, "expected EMPTY or ( but found: 1")]
#[case("POINT (1 x)", ParseErrorKind::NumericFormat, "invalid number found: x")]
#[case("POINT (1 ,)", ParseErrorKind::NumericFormat, "expected number but found: ','")]
#[case("POINT (1", ParseErrorKind::Lexical, "expected number but found: END-OF-STREAM")]
#[case("POINT (1 [2])", ParseErrorKind::Lexical, "expected number but found: '['")]
#[case("MULTIPOINT (, 1 2)", ParseErrorKind::Syntax, "expected number or ( but found: ','")]
#[case("BBOX (1, 2, 3 4)", ParseErrorKind::Syntax, "expected , but found: 4")]
#[case("POLYGON (EMPTY, (1 1, 2 2))", ParseErrorKind::Syntax, "expected ( but found: EMPTY")]
fn error_contract(#[case] text: &str, #[case] kind: ParseErrorKind, #[case] message: &str) {
    let err = error(text);
    assert_eq!(err.kind(), kind, "{}", err);
    assert_eq!(err.message(), message);
}

#[test]
fn error_display_includes_line() {
    insta::assert_snapshot!(
        error("MULTIPOINT (1 2,\n  3 4 5 6)").to_string(),
        @"expected , or ) but found: 6 (line 2)"
    );
}

#[test]
fn nan_coordinates() {
    let line = match shape("LINESTRING (NaN nan, 1 NAN 2)") {
        ShapeBuilder::LineString(line) => line,
        other => panic!("expected linestring, got {:?}", other),
    };
    assert_eq!(
        line.coordinates(),
        &[
            Coordinate::new(f64::NAN, f64::NAN),
            Coordinate::with_alt(1.0, f64::NAN, 2.0)
        ]
    );
}

#[test]
fn overflowing_literals_round_trip_as_infinity() {
    let parsed = parse("POINT (1e400 -1e400)").unwrap();
    let written = to_wkt(parsed.as_ref());
    assert_eq!(written, "POINT (Infinity -Infinity)");
    assert_eq!(parse(&written).unwrap(), parsed);

    assert_eq!(
        shape("LINESTRING (+Infinity 0, -infinity 1e400 INFINITY)"),
        ShapeBuilder::from(LineStringBuilder::new(vec![
            Coordinate::new(f64::INFINITY, 0.0),
            Coordinate::with_alt(f64::NEG_INFINITY, f64::INFINITY, f64::INFINITY),
        ]))
    );
}

#[test]
fn deep_nesting_fails_cleanly() {
    let nested = |levels: usize| {
        format!(
            "{}POINT EMPTY{}",
            "GEOMETRYCOLLECTION (".repeat(levels),
            ")".repeat(levels)
        )
    };
    assert!(parse(&nested(DEFAULT_MAX_DEPTH - 1)).is_ok());

    let err = error(&nested(5000));
    assert_eq!(err.kind(), ParseErrorKind::Syntax);
    assert_eq!(
        err.message(),
        format!("geometry nesting exceeds the maximum depth of {}", DEFAULT_MAX_DEPTH)
    );

    assert!(parse_with_max_depth(&nested(9), 10).is_ok());
    assert!(parse_with_max_depth(&nested(10), 10).is_err());
}

#[test]
fn unicode_words_are_single_tokens() {
    let err = error("POINT (1 2°)");
    assert_eq!(err.message(), "invalid number found: 2°");
}

#[test]
fn idempotent() {
    for sample in WktSources::list_samples() {
        let text = WktSources::get_string(sample).unwrap();
        assert_eq!(parse(&text).unwrap(), parse(&text).unwrap(), "{}", sample);
    }
}

#[test]
fn samples_round_trip_through_writer() {
    for sample in WktSources::list_samples() {
        let parsed = WktSources::get_shape(sample).unwrap();
        let written = to_wkt(parsed.as_ref());
        let reparsed = parse(&written).unwrap();
        match parsed {
            Some(_) => assert_eq!(reparsed, parsed, "{} -> {}", sample, written),
            None => assert_eq!(reparsed, None),
        }
    }
}

#[test]
fn commented_sample() {
    let text = WktSources::get_string("080-commented-multiline.wkt").unwrap();
    insta::assert_snapshot!(
        to_wkt(parse(&text).unwrap().as_ref()),
        @"LINESTRING (-73.9857 40.7484, -0.1276 51.5072, NaN NaN)"
    );
}

#[test]
fn collection_sample_drops_empty_member() {
    let text = WktSources::get_string("070-geometrycollection.wkt").unwrap();
    insta::assert_snapshot!(
        to_wkt(parse(&text).unwrap().as_ref()),
        @"GEOMETRYCOLLECTION (POINT (40 10), LINESTRING (10 10, 20 20, 10 40), GEOMETRYCOLLECTION (POINT (1 1)))"
    );
}
