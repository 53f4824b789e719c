//! # Convention Checker
//!
//! Pattern checks over the raw text:
//!
//! 1. The program prints through `fmt.Println`.
//! 2. Every line starting with `for` is a three-clause counting loop
//!    `for <v> := <n>; <v> < <n>; <v>++` that uses one variable throughout.
//! 3. Every whole-word digit run is an integer.
//!
//! Only the counting-loop shape is recognized. Range loops, conditionless
//! loops and `<=` conditions are all reported as malformed, as is any line
//! that merely begins with the letters `for` (`format := 1`).
//!
//! Check 3 cannot fire: the extraction pattern only yields digit runs. It
//! stays as an explicit no-op so the check list matches the reported
//! violation kinds.

use regex::Regex;
use thiserror::Error;

use super::{
    Checker,
    report::{Report, Violation},
};

pub const PRINT_CALL: &str = "fmt.Println";
pub const LOOP_PREFIX: &str = "for";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConventionViolation {
    #[error("El código debe usar 'fmt.Println' para imprimir.")]
    MissingPrintCall,

    #[error("Estructura de bucle 'for' incorrecta en la línea: {text}")]
    MalformedForLoop { line: usize, text: String },

    #[error("Inconsistencia de variables en la línea: {text}")]
    InconsistentLoopVariable {
        line: usize,
        text: String,
        initializer: String,
        condition: String,
        increment: String,
    },

    #[error("Error en el tipo de número: {literal}. Debe ser un entero.")]
    NonIntegerLiteral { literal: String },
}

impl Violation for ConventionViolation {
    const ALL_CLEAR: &'static str = "Uso correcto de las estructuras semánticas";

    fn code(&self) -> &'static str {
        match self {
            Self::MissingPrintCall => "C001",
            Self::MalformedForLoop { .. } => "C002",
            Self::InconsistentLoopVariable { .. } => "C003",
            Self::NonIntegerLiteral { .. } => "C004",
        }
    }
}

pub type ConventionReport = Report<ConventionViolation>;

#[derive(Debug, Clone)]
pub struct ConventionChecker {
    re_counting_loop: Regex,
    re_integer_literal: Regex,
}

impl Default for ConventionChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl ConventionChecker {
    pub fn new() -> Self {
        Self {
            re_counting_loop: Regex::new(
                r"for\s+(?P<init>\w+)\s*:=\s*\d+;\s*(?P<cond>\w+)\s*<\s*\d+;\s*(?P<step>\w+)\+\+",
            )
            .expect("counting loop pattern compiles"),
            re_integer_literal: Regex::new(r"\b\d+\b").expect("integer pattern compiles"),
        }
    }

    fn check_loops(&self, input: &str, report: &mut ConventionReport) {
        for (index, line) in input.split('\n').enumerate() {
            let text = line.trim();
            if !text.starts_with(LOOP_PREFIX) {
                continue;
            }

            let Some(caps) = self.re_counting_loop.captures(text) else {
                report.push(ConventionViolation::MalformedForLoop {
                    line: index + 1,
                    text: text.to_string(),
                });
                continue;
            };

            let (init, cond, step) = (&caps["init"], &caps["cond"], &caps["step"]);
            if init != cond || init != step {
                report.push(ConventionViolation::InconsistentLoopVariable {
                    line: index + 1,
                    text: text.to_string(),
                    initializer: init.to_string(),
                    condition: cond.to_string(),
                    increment: step.to_string(),
                });
            }
        }
    }

    fn check_literals(&self, input: &str, report: &mut ConventionReport) {
        for literal in self.re_integer_literal.find_iter(input) {
            // Always digits: the pattern admits nothing else.
            if !literal.as_str().chars().all(char::is_numeric) {
                report.push(ConventionViolation::NonIntegerLiteral {
                    literal: literal.as_str().to_string(),
                });
            }
        }
    }
}

impl Checker for ConventionChecker {
    type Violation = ConventionViolation;

    #[tracing::instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    fn check(&self, input: &str) -> ConventionReport {
        let mut report = Report::new();

        if !input.contains(PRINT_CALL) {
            report.push(ConventionViolation::MissingPrintCall);
        }
        self.check_loops(input, &mut report);
        self.check_literals(input, &mut report);

        tracing::debug!(violations = report.len(), "conventions checked");
        report
    }
}

pub fn check_conventions(input: &str) -> ConventionReport {
    ConventionChecker::new().check(input)
}
