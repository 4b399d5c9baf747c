//! Terminal readers shared by every production
//!
//! Each reader consumes exactly one token and either returns what it found or fails with
//! a diagnostic naming what it expected. Keyword matching (`EMPTY`) ignores case; the
//! punctuation tokens are matched exactly.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{ParseError, ParseErrorKind};
use crate::wkt::lexer::{Token, TokenStream};

pub(crate) const EMPTY: &str = "EMPTY";
const NAN: &str = "NaN";
pub(crate) const INFINITY: &str = "Infinity";

static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal literal pattern is valid")
});

/// What opens a geometry body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Opening {
    Empty,
    Open,
}

/// What follows an element inside a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Separator {
    Comma,
    Closer,
}

pub(crate) fn next_empty_or_open(stream: &mut TokenStream<'_>) -> Result<Opening, ParseError> {
    match stream.next_token() {
        Some(Token::Word(word)) if word.eq_ignore_ascii_case(EMPTY) => Ok(Opening::Empty),
        Some(Token::OpenParen) => Ok(Opening::Open),
        _ => Err(ParseError::expected(
            stream,
            &format!("{} or (", EMPTY),
            ParseErrorKind::Syntax,
        )),
    }
}

pub(crate) fn next_closer(stream: &mut TokenStream<'_>) -> Result<(), ParseError> {
    match stream.next_token() {
        Some(Token::CloseParen) => Ok(()),
        _ => Err(ParseError::expected(stream, ")", ParseErrorKind::Syntax)),
    }
}

pub(crate) fn next_comma(stream: &mut TokenStream<'_>) -> Result<(), ParseError> {
    match stream.next_token() {
        Some(Token::Comma) => Ok(()),
        _ => Err(ParseError::expected(stream, ",", ParseErrorKind::Syntax)),
    }
}

pub(crate) fn next_closer_or_comma(stream: &mut TokenStream<'_>) -> Result<Separator, ParseError> {
    match stream.next_token() {
        Some(Token::Comma) => Ok(Separator::Comma),
        Some(Token::CloseParen) => Ok(Separator::Closer),
        _ => Err(ParseError::expected(stream, ", or )", ParseErrorKind::Syntax)),
    }
}

/// Read a number: `NaN` or an optionally signed `Infinity` in any case, or a decimal
/// floating point literal. Literals too large for `f64` become infinite.
pub(crate) fn next_number(stream: &mut TokenStream<'_>) -> Result<f64, ParseError> {
    let word = match stream.next_token() {
        Some(Token::Word(word)) => word,
        _ => {
            return Err(ParseError::expected_or_lexical(
                stream,
                "number",
                ParseErrorKind::NumericFormat,
            ))
        }
    };

    if word.eq_ignore_ascii_case(NAN) {
        return Ok(f64::NAN);
    }
    let (sign, magnitude) = match word.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, word.strip_prefix('+').unwrap_or(&word)),
    };
    if magnitude.eq_ignore_ascii_case(INFINITY) {
        return Ok(sign * f64::INFINITY);
    }

    let invalid = || {
        ParseError::new(
            ParseErrorKind::NumericFormat,
            format!("invalid number found: {}", word),
            stream.position(),
        )
    };
    if !DECIMAL_LITERAL.is_match(&word) {
        return Err(invalid());
    }
    word.parse::<f64>().map_err(|_| invalid())
}

/// Fail unless the stream is exhausted
pub(crate) fn check_eof(stream: &mut TokenStream<'_>) -> Result<(), ParseError> {
    match stream.next_token() {
        None => Ok(()),
        Some(_) => Err(ParseError::new(
            ParseErrorKind::Syntax,
            format!(
                "expected end of WKT string but found additional text: {}",
                stream.found()
            ),
            stream.position(),
        )),
    }
}
