//! # geowkt
//!
//! A parser for geometry encoded as well-known text (WKT).
//!
//! The text is tokenized by a logos lexer, then a hand-written recursive descent
//! grammar assembles an immutable tree of shape builders. Parsing either consumes the
//! whole input or fails with a positioned diagnostic; partial results are never returned.
//!
//! ```text
//! GEOMETRYCOLLECTION (POINT (10 10), LINESTRING (10 10, 20 20))
//! ```
//!
//! See [wkt::parser::parse] for the entry point and [wkt::formats] for the reverse trip.

pub mod wkt;
