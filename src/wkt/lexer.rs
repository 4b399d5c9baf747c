//! Lexer module for WKT geometry text
//!
//! This module contains the tokenization logic for WKT, including token definitions,
//! the logos-backed tokenizer and the token stream the grammar reads from.
//!
//! Lexical classes
//!
//! Numbers and keywords share a single WORD class. Letters, the extended range starting
//! at code point 160, digits and the characters `-`, `+` and `.` are all word characters,
//! so `-12.5e3`, `NaN` and `POLYGON` come out of the lexer the same way. The grammar tells
//! them apart by content, never by lexer class.
//!
//! Bytes 0 to 32 are whitespace and `#` starts a comment running to the end of the line.
//! `(`, `)` and `,` are single character tokens. Anything else is kept as an
//! [Token::Other] token so the grammar can report it instead of silently dropping it.

pub mod lexer_impl;
pub mod stream;
pub mod tokens;

pub use lexer_impl::tokenize;
pub use stream::TokenStream;
pub use tokens::Token;
