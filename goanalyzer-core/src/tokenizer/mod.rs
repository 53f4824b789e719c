//! # Tokenizer Component
//!
//! Lexical analysis of the submitted source. The tokenizer classifies maximal
//! substrings into five categories and counts them.
//!
//! ## Design Principles
//!
//! * **Explicit rule table**: classification is an ordered list of
//!   `(kind, matcher)` pairs in [`rules::RULES`]; the first rule that matches
//!   at the current position wins.
//! * **No failure path**: characters no rule accepts become `ERR` tokens and
//!   scanning continues with the next character.
//! * **No shared state**: every call builds its own [`Tokenizer`](token::Tokenizer),
//!   so concurrent calls need no coordination.
//!
//! ## Component Structure
//!
//! * [`token`]: token types, census and the scanner loop
//! * [`keyword`]: the keyword set
//! * [`rules`]: identifier, number, symbol and illegal-character matchers
//! * [`whitespace`]: whitespace and line breaks
//!
//! ## Usage Example
//!
//! ```rust
//! use goanalyzer_core::tokenizer::token::{TokenKind, tokenize};
//!
//! let stream = tokenize("fmt.Println(1)");
//! assert_eq!(stream.census.get(TokenKind::Keyword), 2);
//! assert_eq!(stream.census.get(TokenKind::Err), 1);
//! assert_eq!(stream.census.total(), stream.tokens.len());
//! ```

pub mod keyword;
pub mod rules;
pub mod token;
pub mod whitespace;
