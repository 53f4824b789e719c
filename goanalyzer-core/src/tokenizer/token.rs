use std::str::FromStr;

use nom::{IResult, error::VerboseError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    keyword::Keyword,
    rules::{classify, classify_after_word, is_word_char},
    whitespace::parse_trivia,
};

/// The five lexical categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TokenKind {
    Keyword,
    Id,
    Num,
    Sym,
    Err,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Token {
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::from_str(&self.lexeme).ok(),
            _ => None,
        }
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Err
    }
}

/// Occurrences per [`TokenKind`]. Every kind is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenCensus {
    #[serde(rename = "KEYWORD")]
    pub keyword: usize,
    #[serde(rename = "ID")]
    pub id: usize,
    #[serde(rename = "NUM")]
    pub num: usize,
    #[serde(rename = "SYM")]
    pub sym: usize,
    #[serde(rename = "ERR")]
    pub err: usize,
}

impl TokenCensus {
    pub fn get(&self, kind: TokenKind) -> usize {
        match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::Id => self.id,
            TokenKind::Num => self.num,
            TokenKind::Sym => self.sym,
            TokenKind::Err => self.err,
        }
    }

    pub fn record(&mut self, kind: TokenKind) {
        let slot = match kind {
            TokenKind::Keyword => &mut self.keyword,
            TokenKind::Id => &mut self.id,
            TokenKind::Num => &mut self.num,
            TokenKind::Sym => &mut self.sym,
            TokenKind::Err => &mut self.err,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        self.keyword + self.id + self.num + self.sym + self.err
    }
}

impl<'a> FromIterator<&'a Token> for TokenCensus {
    fn from_iter<T: IntoIterator<Item = &'a Token>>(iter: T) -> Self {
        let mut census = TokenCensus::default();
        for token in iter {
            census.record(token.kind);
        }
        census
    }
}

/// Output of one tokenizer run: the tokens in input order and their census.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    pub census: TokenCensus,
}

impl TokenStream {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }
}

/// Single-use scanner. Position counters live in the value, so separate
/// calls never observe each other.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    current_line: usize,
    current_column: usize,
    after_word_char: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            current_line: 1,   // 1-based
            current_column: 1, // 1-based
            after_word_char: false,
        }
    }

    #[tracing::instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    pub fn tokenize(mut self, input: &str) -> TokenStream {
        let mut stream = TokenStream::default();
        let mut remaining = input;

        while !remaining.is_empty() {
            if let Ok((rest, trivia)) = parse_trivia(remaining) {
                self.update_position(trivia);
                remaining = rest;
                continue;
            }

            let matched = if self.after_word_char {
                classify_after_word(remaining)
            } else {
                classify(remaining)
            };
            // The illegal-character rule accepts anything that is not
            // whitespace, and trivia was skipped above.
            debug_assert!(matched.is_some(), "no rule matched at {:?}", remaining);
            let Some((kind, lexeme, rest)) = matched else {
                break;
            };

            if kind == TokenKind::Err {
                tracing::debug!(
                    line = self.current_line,
                    column = self.current_column,
                    "illegal character {:?}",
                    lexeme
                );
            }

            stream.tokens.push(Token {
                kind,
                lexeme: lexeme.to_string(),
                line: self.current_line,
                column: self.current_column,
            });
            stream.census.record(kind);
            self.update_position(lexeme);
            remaining = rest;
        }

        stream
    }

    fn update_position(&mut self, text: &str) {
        for c in text.chars() {
            self.after_word_char = is_word_char(c);
            if c == '\n' {
                self.current_line += 1;
                self.current_column = 1;
            } else {
                self.current_column += 1;
            }
        }
    }
}

/// Tokenizes `input` with a fresh [`Tokenizer`].
pub fn tokenize(input: &str) -> TokenStream {
    Tokenizer::new().tokenize(input)
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds_and_lexemes(input: &str) -> Vec<(TokenKind, String)> {
        tokenize(input)
            .tokens
            .into_iter()
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn test_print_call() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_lexemes("fmt.Println(1)"),
            vec![
                (Keyword, "fmt".to_string()),
                (Err, ".".to_string()),
                (Keyword, "Println".to_string()),
                (Sym, "(".to_string()),
                (Num, "1".to_string()),
                (Sym, ")".to_string()),
            ]
        );
    }

    #[test]
    fn test_counting_loop() {
        use TokenKind::*;
        let stream = tokenize("for i := 0; i < 10; i++ {");
        let kinds: Vec<_> = stream.kinds().collect();
        assert_eq!(
            kinds,
            vec![
                Keyword, Id, Err, Sym, Num, Sym, Id, Sym, Num, Sym, Id, Sym, Sym, Sym
            ]
        );
        assert_eq!(stream.census.total(), stream.len());
    }

    #[test]
    fn test_keyword_equal_identifier_is_keyword() {
        let stream = tokenize("main := 1");
        assert_eq!(stream.tokens[0].kind, TokenKind::Keyword);
        assert_eq!(stream.tokens[0].keyword(), Some(Keyword::Main));
    }

    #[test]
    fn test_positions() {
        let stream = tokenize("package main\n\n  func x");
        let positions: Vec<_> = stream
            .tokens
            .iter()
            .map(|t| (t.lexeme.as_str(), t.line, t.column))
            .collect();
        assert_eq!(
            positions,
            vec![
                ("package", 1, 1),
                ("main", 1, 9),
                ("func", 3, 3),
                ("x", 3, 8),
            ]
        );
    }

    #[test]
    fn test_word_cannot_start_mid_word() {
        use TokenKind::*;
        for input in ["1for", "42x", "3_000", "9lives", "éfor"] {
            let stream = tokenize(input);
            assert_eq!(stream.len(), input.chars().count(), "{input}");
            assert!(stream.tokens.iter().all(Token::is_illegal), "{input}");
        }

        assert_eq!(
            kinds_and_lexemes("x:=1for"),
            vec![
                (Id, "x".to_string()),
                (Err, ":".to_string()),
                (Sym, "=".to_string()),
                (Err, "1".to_string()),
                (Err, "f".to_string()),
                (Err, "o".to_string()),
                (Err, "r".to_string()),
            ]
        );
    }

    #[test]
    fn test_boundary_resets_after_non_word_char() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_lexemes("1 for 3.5"),
            vec![
                (Num, "1".to_string()),
                (Keyword, "for".to_string()),
                (Num, "3".to_string()),
                (Err, ".".to_string()),
                (Num, "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_whitespace_only() {
        let stream = tokenize(" \t\r\n\n ");
        assert!(stream.is_empty());
        assert_eq!(stream.census, TokenCensus::default());
    }

    #[test]
    fn test_string_literal_is_illegal_characters() {
        let stream = tokenize(r#""hi""#);
        assert_eq!(stream.census.err, 2);
        assert_eq!(stream.census.id, 1);
        assert!(stream.tokens[0].is_illegal());
    }

    #[test]
    fn test_census_matches_tokens() {
        let stream = tokenize("package main\nimport \"fmt\"\nfunc main() { x := 3.5 }");
        let recount: TokenCensus = stream.tokens.iter().collect();
        assert_eq!(recount, stream.census);
        // package main import fmt func main
        assert_eq!(stream.census.get(TokenKind::Keyword), 6);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Keyword.to_string(), "KEYWORD");
        assert_eq!(TokenKind::Id.to_string(), "ID");
        assert_eq!(TokenKind::Err.as_ref(), "ERR");
        assert_eq!(
            serde_json::to_string(&TokenCensus::default()).unwrap(),
            r#"{"KEYWORD":0,"ID":0,"NUM":0,"SYM":0,"ERR":0}"#
        );
    }
}
