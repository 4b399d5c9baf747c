//! Implementation of the WKT lexer
//!
//! This module provides convenience functions for tokenizing WKT text.
//! The actual tokenization is handled entirely by logos.

use crate::wkt::lexer::tokens::Token;
use logos::Logos;

/// Pull the next token out of a logos lexer together with its byte span.
///
/// Every character has a lexical class, so logos only reports an error on input it
/// cannot slice; that case surfaces as the replacement character.
pub(crate) fn next_spanned(lexer: &mut logos::Lexer<'_, Token>) -> Option<(Token, logos::Span)> {
    let result = lexer.next()?;
    let token = result.unwrap_or(Token::Other(char::REPLACEMENT_CHARACTER));
    Some((token, lexer.span()))
}

/// Tokenize source text and collect the tokens with their spans
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(spanned) = next_spanned(&mut lexer) {
        tokens.push(spanned);
    }

    tokens
}
