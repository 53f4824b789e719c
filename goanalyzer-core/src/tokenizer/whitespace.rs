//! Whitespace and line breaks. Neither produces a token; the scanner only
//! uses them to advance its line and column counters.

use nom::{branch::alt, bytes::complete::take_while1, error::context};

use super::token::ParserResult;

pub fn parse_newline(input: &str) -> ParserResult<'_, &str> {
    context("newline", take_while1(|c: char| c == '\n'))(input)
}

pub fn parse_whitespace(input: &str) -> ParserResult<'_, &str> {
    context(
        "whitespace",
        take_while1(|c: char| c.is_whitespace() && c != '\n'),
    )(input)
}

/// Consumes a run of line breaks or of other whitespace.
pub fn parse_trivia(input: &str) -> ParserResult<'_, &str> {
    alt((parse_newline, parse_whitespace))(input)
}
