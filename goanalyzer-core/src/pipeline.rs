//! Runs the three analyses over one input.

use crate::{
    InternalResult,
    analyzer::{
        Checker, ConventionChecker, ConventionReport, StructuralReport, StructureChecker,
    },
    config::AnalyzerConfig,
    tokenizer::token::{TokenStream, tokenize},
};

/// Results of the lexical, structural and convention passes over one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub lexical: TokenStream,
    pub structure: StructuralReport,
    pub conventions: ConventionReport,
}

impl Analysis {
    pub fn is_clean(&self) -> bool {
        self.structure.is_clean() && self.conventions.is_clean()
    }
}

/// Analyzes `input` with no size limit.
pub fn analyze(input: &str) -> Analysis {
    Analyzer::default().run(input)
}

/// Front-end entry point: applies the configured input limit, then runs the
/// three passes. Compiled patterns are built once and reused across calls.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
    conventions: ConventionChecker,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            conventions: ConventionChecker::new(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    #[tracing::instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    pub fn analyze(&self, input: &str) -> InternalResult<Analysis> {
        self.config.check_input(input)?;
        let analysis = self.run(input);
        tracing::info!(
            tokens = analysis.lexical.len(),
            illegal = analysis.lexical.census.err,
            structural = analysis.structure.len(),
            conventions = analysis.conventions.len(),
            "analysis complete"
        );
        Ok(analysis)
    }

    fn run(&self, input: &str) -> Analysis {
        Analysis {
            lexical: tokenize(input),
            structure: StructureChecker.check(input),
            conventions: self.conventions.check(input),
        }
    }
}
