//! Coordinate and coordinate list grammar
//!
//! ```text
//! coordinate      := number number [number]
//! element         := coordinate | "(" coordinate ")"
//! coordinate-list := element ("," element)* ")"
//! ```
//!
//! The list reader consumes the closing `)` of the enclosing body. Bare and parenthesized
//! elements may be mixed within one list.

use super::error::{ParseError, ParseErrorKind};
use super::terminals::{next_closer, next_closer_or_comma, next_number, Separator};
use crate::wkt::ast::Coordinate;
use crate::wkt::lexer::{Token, TokenStream};

/// Read longitude and latitude, plus altitude when a third word follows
pub(crate) fn parse_coordinate(stream: &mut TokenStream<'_>) -> Result<Coordinate, ParseError> {
    let lon = next_number(stream)?;
    let lat = next_number(stream)?;
    if stream.is_word_next() {
        let alt = next_number(stream)?;
        return Ok(Coordinate::with_alt(lon, lat, alt));
    }
    Ok(Coordinate::new(lon, lat))
}

fn parse_element(stream: &mut TokenStream<'_>) -> Result<Coordinate, ParseError> {
    if stream.is_word_next() {
        return parse_coordinate(stream);
    }
    match stream.next_token() {
        Some(Token::OpenParen) => {
            let coordinate = parse_coordinate(stream)?;
            next_closer(stream)?;
            Ok(coordinate)
        }
        _ => Err(ParseError::expected(
            stream,
            "number or (",
            ParseErrorKind::Syntax,
        )),
    }
}

/// Read one or more comma separated elements up to and including the closing `)`
pub(crate) fn parse_coordinate_list(
    stream: &mut TokenStream<'_>,
) -> Result<Vec<Coordinate>, ParseError> {
    let mut coordinates = vec![parse_element(stream)?];
    while next_closer_or_comma(stream)? == Separator::Comma {
        coordinates.push(parse_element(stream)?);
    }
    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(source: &str) -> Result<Vec<Coordinate>, ParseError> {
        parse_coordinate_list(&mut TokenStream::new(source))
    }

    #[test]
    fn test_coordinate_two_and_three_components() {
        let mut stream = TokenStream::new("1 2 3 4");
        assert_eq!(
            parse_coordinate(&mut stream).unwrap(),
            Coordinate::with_alt(1.0, 2.0, 3.0)
        );
        // a fourth component is never read
        assert_eq!(stream.next_token(), Some(Token::Word("4".to_string())));

        let mut stream = TokenStream::new("1 2,");
        assert_eq!(parse_coordinate(&mut stream).unwrap(), Coordinate::new(1.0, 2.0));
    }

    #[test]
    fn test_bare_list() {
        assert_eq!(
            list("30 10, 10 30, 40 40)").unwrap(),
            vec![
                Coordinate::new(30.0, 10.0),
                Coordinate::new(10.0, 30.0),
                Coordinate::new(40.0, 40.0),
            ]
        );
    }

    #[test]
    fn test_mixed_parenthesized_list() {
        assert_eq!(
            list("(10 40), 40 30 5, (20 20 1))").unwrap(),
            vec![
                Coordinate::new(10.0, 40.0),
                Coordinate::with_alt(40.0, 30.0, 5.0),
                Coordinate::with_alt(20.0, 20.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_element_must_start_with_number_or_paren() {
        let err = list(", 1 2)").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Syntax);
        assert_eq!(err.message(), "expected number or ( but found: ','");
    }

    #[test]
    fn test_parenthesized_element_needs_closer() {
        let err = list("(1 2, 3 4)").unwrap_err();
        assert_eq!(err.message(), "expected ) but found: ','");
    }

    #[test]
    fn test_list_needs_separator() {
        let err = list("1 2 3 4)").unwrap_err();
        assert_eq!(err.message(), "expected , or ) but found: 4");
    }
}
