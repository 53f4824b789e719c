//! # goanalyzer: heuristic checks for small Go programs
//!
//! Three independent analyses over the same source text:
//!
//! ```text
//!                 ┌─> Tokenizer          ─> TokenStream      (lexical)
//! Source text ────┼─> StructureChecker   ─> StructuralReport (syntactic)
//!                 └─> ConventionChecker  ─> ConventionReport (semantic)
//! ```
//!
//! None of the passes consumes another's output, and none keeps state
//! between calls.
//!
//! ## What this is not
//!
//! This is not a compiler front end. There is no syntax tree, no scope or
//! type resolution, and no guarantee that a malformed program is caught. The
//! passes are pattern matches over raw text and single lines, and their
//! known blind spots are part of the observable behavior:
//!
//! * `fmt.Println` tokenizes as `fmt`, an illegal `.`, and `Println`.
//! * A brace only counts when it is the last character on its line.
//! * Any `for` loop other than `for i := 0; i < n; i++` is malformed.
//!
//! ## Entry points
//!
//! * [`tokenize`](tokenizer::token::tokenize)
//! * [`check_structure`](analyzer::check_structure)
//! * [`check_conventions`](analyzer::check_conventions)
//! * [`analyze`](pipeline::analyze) and [`Analyzer`](pipeline::Analyzer),
//!   which also enforces the configured input limit
//!
//! ## Errors
//!
//! The analyses never fail. Irregular input shows up as `ERR` tokens and
//! report entries. [`Error`] only covers input limits and configuration.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod tokenizer;

// Re-exports
pub use analyzer::{
    Checker, ConventionReport, ConventionViolation, Report, StructuralReport,
    StructuralViolation, Violation, check_conventions, check_structure,
};
pub use error::*;
pub use pipeline::{Analysis, Analyzer, analyze};
pub use tokenizer::token::{Token, TokenCensus, TokenKind, TokenStream, tokenize};
