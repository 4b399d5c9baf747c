//! WKT parser
//!
//! A hand-written recursive descent parser over the token stream. The grammar reads strictly
//! left to right with one token of lookahead and either consumes the whole input or fails.
//!
//! Structure:
//!     - terminals: single-token readers (`EMPTY` or `(`, `)`, `,`, numbers, end of input)
//!     - coordinates: coordinates and coordinate lists
//!     - grammar: the keyword dispatcher and one production per geometry type
//!     - error: positioned parse failures
//!
//! The EMPTY keyword produces no shape at all, so [parse] returns `Ok(None)` for
//! `POINT EMPTY` and friends. Callers that hand shapes to an index must handle that case.

mod coordinates;
pub mod error;
mod grammar;
mod terminals;

pub use error::{ParseError, ParseErrorKind};
pub use crate::wkt::lexer::stream::DEFAULT_MAX_DEPTH;
pub(crate) use terminals::{EMPTY, INFINITY};

use crate::wkt::ast::ShapeBuilder;
use crate::wkt::lexer::TokenStream;

/// Parse one WKT geometry.
///
/// Trailing tokens after a complete geometry are an error; partial parses are never
/// accepted. The token stream borrows `text` only for the duration of the call.
pub fn parse(text: &str) -> Result<Option<ShapeBuilder>, ParseError> {
    parse_with_max_depth(text, DEFAULT_MAX_DEPTH)
}

/// Parse one WKT geometry, allowing at most `max_depth` geometries nested inside each
/// other. Deeper input fails with a syntax error instead of exhausting the stack.
pub fn parse_with_max_depth(
    text: &str,
    max_depth: usize,
) -> Result<Option<ShapeBuilder>, ParseError> {
    tracing::debug!(bytes = text.len(), max_depth, "parsing WKT");

    let mut stream = TokenStream::new(text).with_max_depth(max_depth);
    let result = grammar::parse_geometry(&mut stream).and_then(|shape| {
        terminals::check_eof(&mut stream)?;
        Ok(shape)
    });

    match &result {
        Ok(shape) => tracing::debug!(
            shape_type = ?shape.as_ref().map(ShapeBuilder::shape_type),
            "parsed WKT"
        ),
        Err(e) => tracing::debug!(error = %e, kind = %e.kind(), "failed to parse WKT"),
    }
    result
}
