//! Token definitions for WKT
//!
//! The tokens are defined using the logos derive macro. Whitespace and comments are
//! skipped by the lexer itself, so the grammar only ever sees the five token kinds below
//! plus the end of the stream.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Label used in diagnostics when the stream is exhausted
pub const END_OF_STREAM: &str = "END-OF-STREAM";

/// All possible tokens in WKT text
#[derive(Logos, Debug, PartialEq, Clone, Serialize)]
#[logos(skip r"[\x00-\x20]+")]
#[logos(skip r"#[^\r\n]*")]
pub enum Token {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    /// Keywords and numbers alike
    #[regex(r"[a-zA-Z0-9+.\-\x{A0}-\x{10FFFF}]+", |lex| lex.slice().to_string())]
    Word(String),

    /// A character without a lexical class of its own
    #[regex(r"[^\x00-\x20a-zA-Z0-9+.\-\x{A0}-\x{10FFFF}(),#]", |lex| lex.slice().chars().next())]
    Other(char),
}

impl Token {
    /// Check if this token is a word (keyword or number)
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    /// Render the token the way diagnostics quote it: words verbatim, every other
    /// token as a quoted character.
    pub fn to_found_string(&self) -> String {
        match self {
            Token::Word(text) => text.clone(),
            Token::OpenParen => "'('".to_string(),
            Token::CloseParen => "')'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Other(ch) => format!("'{}'", ch),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParen => write!(f, "<lparen>"),
            Token::CloseParen => write!(f, "<rparen>"),
            Token::Comma => write!(f, "<comma>"),
            Token::Word(text) => write!(f, "<word:{}>", text),
            Token::Other(ch) => write!(f, "<other:{}>", ch),
        }
    }
}
