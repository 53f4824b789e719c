//! # Structural Checker
//!
//! Line-oriented well-formedness checks:
//!
//! 1. `package main` appears somewhere in the text.
//! 2. `func main()` appears somewhere in the text.
//! 3. Braces balance, counting only lines whose last non-whitespace
//!    character is `{` or `}`.
//!
//! A brace in the middle of a line is invisible here, so `if x { y() }` on a
//! single line neither opens nor closes anything. Parentheses and brackets
//! are not checked.

use thiserror::Error;

use super::{
    Checker,
    report::{Report, Violation},
};

pub const PACKAGE_CLAUSE: &str = "package main";
pub const ENTRYPOINT: &str = "func main()";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralViolation {
    #[error("El código debe contener 'package main'.")]
    MissingPackage,

    #[error("El código debe contener 'func main()'.")]
    MissingEntrypoint,

    #[error("Llave de cierre sin apertura correspondiente en la línea {line}.")]
    UnmatchedClosingBrace { line: usize },

    #[error("Una o más llaves de apertura no tienen cierre correspondiente.")]
    UnmatchedOpeningBraces { open: usize },
}

impl Violation for StructuralViolation {
    const ALL_CLEAR: &'static str = "Sintaxis correcta";

    fn code(&self) -> &'static str {
        match self {
            Self::MissingPackage => "S001",
            Self::MissingEntrypoint => "S002",
            Self::UnmatchedClosingBrace { .. } => "S003",
            Self::UnmatchedOpeningBraces { .. } => "S004",
        }
    }
}

pub type StructuralReport = Report<StructuralViolation>;

#[derive(Debug, Clone, Copy, Default)]
pub struct StructureChecker;

impl StructureChecker {
    fn check_braces(&self, input: &str, report: &mut StructuralReport) {
        let mut open = 0usize;

        for (index, line) in input.split('\n').enumerate() {
            let trimmed = line.trim();
            if trimmed.ends_with('{') {
                open += 1;
            } else if trimmed.ends_with('}') {
                if open == 0 {
                    report.push(StructuralViolation::UnmatchedClosingBrace { line: index + 1 });
                } else {
                    open -= 1;
                }
            }
        }

        if open > 0 {
            report.push(StructuralViolation::UnmatchedOpeningBraces { open });
        }
    }
}

impl Checker for StructureChecker {
    type Violation = StructuralViolation;

    #[tracing::instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    fn check(&self, input: &str) -> StructuralReport {
        let mut report = Report::new();

        if !input.contains(PACKAGE_CLAUSE) {
            report.push(StructuralViolation::MissingPackage);
        }
        if !input.contains(ENTRYPOINT) {
            report.push(StructuralViolation::MissingEntrypoint);
        }
        self.check_braces(input, &mut report);

        tracing::debug!(violations = report.len(), "structure checked");
        report
    }
}

pub fn check_structure(input: &str) -> StructuralReport {
    StructureChecker.check(input)
}
