//! # Classification Rules
//!
//! The tokenizer is driven by [`RULES`], an ordered table of
//! `(TokenKind, matcher)` pairs. At every scan position the rules are tried
//! from first to last and the first one that matches decides the token.
//!
//! | Order | Kind      | Matches                                           |
//! |-------|-----------|---------------------------------------------------|
//! | 1     | `KEYWORD` | a whole word from the keyword set                 |
//! | 2     | `ID`      | `[A-Za-z_][A-Za-z_0-9]*` as a whole word          |
//! | 3     | `NUM`     | ASCII digits as a whole word                      |
//! | 4     | `SYM`     | one of `;{}()[]=<>!+-/*`                          |
//! | 5     | `ERR`     | any other non-whitespace character                |
//!
//! The `ERR` rule accepts every non-whitespace character, so once trivia has
//! been skipped some rule always matches.
//!
//! A whole word has a word boundary on both sides. The rules check the right
//! side; the left side depends on the character before the scan position, so
//! the scanner uses [`classify_after_word`] when that character was a word
//! character. Word characters include non-ASCII letters and digits: `forñ`
//! is not the keyword `for`.

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{digit1, one_of, satisfy},
    combinator::{not, peek, recognize},
    error::context,
    sequence::{pair, terminated},
};

use super::{
    keyword::parse_keyword,
    token::{ParserResult, TokenKind},
};

/// Characters classified as `SYM`. `.` and `,` are deliberately absent.
pub const SYMBOLS: &str = ";{}()[]=<>!+-/*";

/// A rule matcher returns the recognized lexeme and the remaining input.
pub type Matcher = for<'a> fn(&'a str) -> ParserResult<'a, &'a str>;

/// Classification rules in priority order.
pub const RULES: [(TokenKind, Matcher); 5] = [
    (TokenKind::Keyword, parse_keyword as Matcher),
    (TokenKind::Id, parse_identifier as Matcher),
    (TokenKind::Num, parse_number as Matcher),
    (TokenKind::Sym, parse_symbol as Matcher),
    (TokenKind::Err, parse_illegal as Matcher),
];

pub(crate) fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that cannot sit on either side of a word boundary.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Maximal identifier-shaped run ending at a word boundary, shared by the
/// keyword and identifier rules.
pub(crate) fn parse_word(input: &str) -> ParserResult<'_, &str> {
    terminated(
        recognize(pair(take_while1(is_word_start), take_while(is_identifier_char))),
        not(peek(satisfy(is_word_char))),
    )(input)
}

pub fn parse_identifier(input: &str) -> ParserResult<'_, &str> {
    context("identifier", parse_word)(input)
}

pub fn parse_number(input: &str) -> ParserResult<'_, &str> {
    context(
        "number",
        terminated(digit1, not(peek(satisfy(is_word_char)))),
    )(input)
}

pub fn parse_symbol(input: &str) -> ParserResult<'_, &str> {
    context("symbol", recognize(one_of(SYMBOLS)))(input)
}

pub fn parse_illegal(input: &str) -> ParserResult<'_, &str> {
    context("illegal", recognize(satisfy(|c: char| !c.is_whitespace())))(input)
}

/// Runs [`RULES`] in order and returns the first match.
pub fn classify(input: &str) -> Option<(TokenKind, &str, &str)> {
    RULES.iter().find_map(|(kind, matcher)| {
        matcher(input)
            .ok()
            .map(|(rest, lexeme)| (*kind, lexeme, rest))
    })
}

/// Like [`classify`], for a scan position right after a word character.
/// No word can start there, so a leading word character is illegal.
pub fn classify_after_word(input: &str) -> Option<(TokenKind, &str, &str)> {
    if input.starts_with(is_word_char) {
        parse_illegal(input)
            .ok()
            .map(|(rest, lexeme)| (TokenKind::Err, lexeme, rest))
    } else {
        classify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        let (rest, lexeme) = parse_identifier("my_var123 other").unwrap();
        assert_eq!(lexeme, "my_var123");
        assert_eq!(rest, " other");

        let (_, lexeme) = parse_identifier("_x").unwrap();
        assert_eq!(lexeme, "_x");

        assert!(parse_identifier("9lives").is_err());
        assert!(parse_identifier("ñandu").is_err());
        assert!(parse_identifier("añil").is_err());
    }

    #[test]
    fn test_number_must_be_whole_word() {
        let (rest, lexeme) = parse_number("10;").unwrap();
        assert_eq!(lexeme, "10");
        assert_eq!(rest, ";");

        assert!(parse_number("12ab").is_err());
        assert!(parse_number("3_000").is_err());

        let (rest, lexeme) = parse_number("3.14").unwrap();
        assert_eq!(lexeme, "3");
        assert_eq!(rest, ".14");
    }

    #[test]
    fn test_symbol_set() {
        for c in SYMBOLS.chars() {
            let text = c.to_string();
            let (rest, lexeme) = parse_symbol(&text).unwrap();
            assert_eq!(lexeme, text);
            assert_eq!(rest, "");
        }
        for c in ['.', ',', ':', '"', '&', '%'] {
            assert!(parse_symbol(&c.to_string()).is_err(), "{c} is not a symbol");
        }
    }

    #[test]
    fn test_illegal_takes_one_char() {
        let (rest, lexeme) = parse_illegal("ñx").unwrap();
        assert_eq!(lexeme, "ñ");
        assert_eq!(rest, "x");

        assert!(parse_illegal(" ").is_err());
        assert!(parse_illegal("\n").is_err());
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify("for i"), Some((TokenKind::Keyword, "for", " i")));
        assert_eq!(classify("fortune"), Some((TokenKind::Id, "fortune", "")));
        assert_eq!(classify("42)"), Some((TokenKind::Num, "42", ")")));
        assert_eq!(classify("42x"), Some((TokenKind::Err, "4", "2x")));
        assert_eq!(classify("++"), Some((TokenKind::Sym, "+", "+")));
        assert_eq!(classify(":="), Some((TokenKind::Err, ":", "=")));
        assert_eq!(classify(""), None);
        assert_eq!(classify("  "), None);
    }

    #[test]
    fn test_classify_after_word() {
        assert_eq!(
            classify_after_word("for i"),
            Some((TokenKind::Err, "f", "or i"))
        );
        assert_eq!(classify_after_word("000"), Some((TokenKind::Err, "0", "00")));
        assert_eq!(classify_after_word("é"), Some((TokenKind::Err, "é", "")));
        assert_eq!(classify_after_word("+1"), Some((TokenKind::Sym, "+", "1")));
        assert_eq!(classify_after_word(".x"), Some((TokenKind::Err, ".", "x")));
        assert_eq!(classify_after_word(" "), None);
    }

    #[test]
    fn test_word_boundary_counts_non_ascii() {
        assert_eq!(classify("forñ"), Some((TokenKind::Err, "f", "orñ")));
        assert_eq!(classify("7é"), Some((TokenKind::Err, "7", "é")));
    }
}
