//! # Keyword Token Handling
//!
//! The fixed keyword set of the analyzed Go subset. Keywords are matched as
//! whole words: `format` is an identifier, not `for` followed by `mat`.
//!
//! There is no context sensitivity. `fmt` and `Println` are keywords even in
//! `fmt.Println`, and a variable named `main` is still a keyword.

use std::str::FromStr;

use nom::{combinator::map_opt, error::context};

use super::{rules::parse_word, token::ParserResult};

/// The reserved words recognized by the tokenizer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Package,
    Import,
    Func,
    Main,
    For,
    If,
    Else,
    Return,
    Fmt,
    #[strum(serialize = "Println")]
    Println,
}

/// Matches a whole word that is exactly one of the [`Keyword`]s.
///
/// ```
/// # use goanalyzer_core::tokenizer::keyword::parse_keyword;
/// let (rest, lexeme) = parse_keyword("func main()").unwrap();
/// assert_eq!(lexeme, "func");
/// assert_eq!(rest, " main()");
///
/// assert!(parse_keyword("format").is_err());
/// ```
pub fn parse_keyword(input: &str) -> ParserResult<'_, &str> {
    context(
        "keyword",
        map_opt(parse_word, |word| Keyword::from_str(word).ok().map(|_| word)),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_keyword_round_trips() {
        for keyword in Keyword::iter() {
            let (rest, lexeme) = parse_keyword(keyword.as_ref()).unwrap();
            assert_eq!(rest, "");
            assert_eq!(Keyword::from_str(lexeme).unwrap(), keyword);
        }
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        assert!(parse_keyword("Package").is_err());
        assert!(parse_keyword("println").is_err());
        assert!(parse_keyword("FMT").is_err());
    }

    #[test]
    fn test_keyword_requires_whole_word() {
        assert!(parse_keyword("format").is_err());
        assert!(parse_keyword("main2").is_err());
        assert!(parse_keyword("if_").is_err());

        let (rest, lexeme) = parse_keyword("fmt.Println").unwrap();
        assert_eq!(lexeme, "fmt");
        assert_eq!(rest, ".Println");
    }
}
