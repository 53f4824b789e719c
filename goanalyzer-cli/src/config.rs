use goanalyzer_core::{InternalResult, config::AnalyzerConfig};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Analysis(#[from] goanalyzer_core::Error),
}

pub type CliResult<T> = Result<T, CliError>;

/// Analyzer settings for one invocation.
/// Supported sources (in order of precedence):
/// - `--max-input-bytes` (or `GOANALYZER_MAX_INPUT_BYTES`, by clap)
/// - `--config` JSON file
/// - built-in defaults
pub fn resolve_config(
    config_file: Option<&Path>,
    max_input_bytes: Option<usize>,
) -> InternalResult<AnalyzerConfig> {
    let mut config = match config_file {
        Some(path) => goanalyzer_core::config::from_file(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(limit) = max_input_bytes {
        config.max_input_bytes = limit;
    }
    Ok(config)
}
