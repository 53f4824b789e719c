//! # Analyzer Component
//!
//! Text-level checks that run beside the tokenizer. Neither checker looks at
//! tokens; both scan the raw input line by line.
//!
//! * [`structure`]: required declarations and brace balance (syntactic)
//! * [`convention`]: print call and counting-loop consistency (semantic)
//! * [`report`]: the ordered violation list both checkers return
//!
//! Every check in a checker runs on every input. A failed check adds to the
//! report and never stops the remaining checks.

pub mod convention;
pub mod report;
pub mod structure;

pub use convention::{ConventionChecker, ConventionReport, ConventionViolation, check_conventions};
pub use report::{Report, Violation};
pub use structure::{StructuralReport, StructuralViolation, StructureChecker, check_structure};

/// A stateless pass over source text that collects violations.
pub trait Checker {
    type Violation: Violation;

    fn check(&self, input: &str) -> Report<Self::Violation>;
}
