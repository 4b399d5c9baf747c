//! Parse failures
//!
//! Every grammar violation is fatal to the parse call. The error carries an
//! "expected X but found: Y" message, where Y is the offending token as the stream renders
//! it, and the position the token was read from.

use std::fmt;

use crate::wkt::ast::position::Position;
use crate::wkt::lexer::{Token, TokenStream};

/// Broad classes of parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The stream ran out, or held a character with no lexical class, where a word was
    /// required
    Lexical,
    /// The leading keyword names no supported geometry type
    UnknownGeometryType,
    /// A structural token (`(`, `)`, `,`, `EMPTY`, end of input) is missing or replaced
    Syntax,
    /// A token in numeric position is neither `NaN` nor a decimal literal
    NumericFormat,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseErrorKind::Lexical => "lexical error",
            ParseErrorKind::UnknownGeometryType => "unknown geometry type",
            ParseErrorKind::Syntax => "syntax error",
            ParseErrorKind::NumericFormat => "numeric format error",
        };
        write!(f, "{}", name)
    }
}

/// A positioned WKT parse failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    position: Position,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
        }
    }

    /// `expected <what> but found: <last token>` at the stream's current position
    pub(crate) fn expected(stream: &TokenStream<'_>, what: &str, kind: ParseErrorKind) -> Self {
        Self::new(
            kind,
            format!("expected {} but found: {}", what, stream.found()),
            stream.position(),
        )
    }

    /// Like [ParseError::expected], but reported as lexical when the last read hit the
    /// end of the stream or an unclassified character.
    pub(crate) fn expected_or_lexical(
        stream: &TokenStream<'_>,
        what: &str,
        kind: ParseErrorKind,
    ) -> Self {
        let kind = match stream.current() {
            None | Some(Token::Other(_)) => ParseErrorKind::Lexical,
            Some(_) => kind,
        };
        Self::expected(stream, what, kind)
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// One based source line of the failure
    pub fn line(&self) -> usize {
        self.position.line + 1
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {})", self.message, self.line())
    }
}

impl std::error::Error for ParseError {}
