//! Token stream consumed by the WKT grammar
//!
//! The grammar reads strictly left to right with one token of lookahead. The lookahead
//! lives in an explicit `peeked` slot: peeking pulls a token from logos into the slot and
//! the next read takes it back out, so a failed peek leaves nothing to undo.
//!
//! The stream also remembers the last token handed out. Diagnostics quote that token and
//! the line it was read from.
//!
//! Geometry collections nest through recursion, so the stream carries a nesting counter
//! that the grammar bumps per geometry and checks against a maximum.

use logos::Logos;
use std::ops::Range;

use crate::wkt::ast::position::{Position, SourceLocation};
use crate::wkt::lexer::lexer_impl::next_spanned;
use crate::wkt::lexer::tokens::{Token, END_OF_STREAM};

type Spanned = (Token, Range<usize>);

/// Default bound on how many geometries may be nested inside each other
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Lazily tokenized WKT text with a single push-back slot
pub struct TokenStream<'source> {
    lexer: logos::Lexer<'source, Token>,
    location: SourceLocation,
    source_len: usize,
    peeked: Option<Spanned>,
    /// Last token returned by `next_token`; `None` once the stream is exhausted
    current: Option<Spanned>,
    depth: usize,
    max_depth: usize,
}

impl<'source> TokenStream<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            lexer: Token::lexer(source),
            location: SourceLocation::new(source),
            source_len: source.len(),
            peeked: None,
            current: None,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the nesting bound
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Enter one more level of geometry nesting; `false` if that would pass the bound
    pub fn enter_nested(&mut self) -> bool {
        if self.depth >= self.max_depth {
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Read the next token, `None` at the end of the stream
    pub fn next_token(&mut self) -> Option<Token> {
        let next = match self.peeked.take() {
            Some(spanned) => Some(spanned),
            None => next_spanned(&mut self.lexer),
        };
        self.current = next.clone();
        next.map(|(token, _)| token)
    }

    /// Look at the next token without consuming it
    pub fn peek(&mut self) -> Option<&Token> {
        if self.peeked.is_none() {
            self.peeked = next_spanned(&mut self.lexer);
        }
        self.peeked.as_ref().map(|(token, _)| token)
    }

    /// Return the last token read to the stream so the next read yields it again.
    ///
    /// Only one token can be pushed back; a pending peek is replaced.
    pub fn push_back(&mut self) {
        self.peeked = self.current.clone();
    }

    /// Check whether the next token is a word, without consuming it
    pub fn is_word_next(&mut self) -> bool {
        self.peek().is_some_and(Token::is_word)
    }

    /// The last token read, `None` if it was the end of the stream
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref().map(|(token, _)| token)
    }

    /// The last token read, rendered for diagnostics
    pub fn found(&self) -> String {
        match &self.current {
            Some((token, _)) => token.to_found_string(),
            None => END_OF_STREAM.to_string(),
        }
    }

    /// Whether the last read hit the end of the stream
    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Position of the last token read, or of the end of input once exhausted
    pub fn position(&self) -> Position {
        let offset = match &self.current {
            Some((_, span)) => span.start,
            None => self.source_len,
        };
        self.location.byte_to_position(offset)
    }

    /// One based line of the last token read
    pub fn line(&self) -> usize {
        self.position().line + 1
    }
}
