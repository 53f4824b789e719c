use clap::ValueEnum;
use goanalyzer_core::{Analysis, TokenCensus, TokenKind, TokenStream};
use goanalyzer_http::models::AnalyzeResponse;
use std::fmt::Write;
use strum::IntoEnumIterator;

use crate::config::CliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn format_census(census: &TokenCensus) -> String {
    let counts: Vec<String> = TokenKind::iter()
        .map(|kind| format!("{}={}", kind, census.get(kind)))
        .collect();
    format!("Total: {}", counts.join(" "))
}

pub fn format_tokens(stream: &TokenStream) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10}{:<9}LEXEME", "LINE:COL", "KIND");
    for token in &stream.tokens {
        let position = format!("{}:{}", token.line, token.column);
        let _ = writeln!(out, "{:<10}{:<9}{}", position, token.kind.as_ref(), token.lexeme);
    }
    let _ = writeln!(out, "{}", format_census(&stream.census));
    out
}

pub fn format_verdicts(analysis: &Analysis) -> String {
    format!(
        "Sintáctico: {}\nSemántico: {}\n",
        analysis.structure.summary(),
        analysis.conventions.summary()
    )
}

pub fn format_analysis(analysis: Analysis, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}\n{}",
            format_tokens(&analysis.lexical),
            format_verdicts(&analysis)
        )),
        OutputFormat::Json => {
            let response = AnalyzeResponse::from(analysis);
            Ok(format!("{}\n", serde_json::to_string_pretty(&response)?))
        }
    }
}
