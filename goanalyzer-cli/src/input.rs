use goanalyzer_core::{Error, config::AnalyzerConfig};
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use crate::config::CliResult;

/// Reads source text from `path`, or from stdin when the path is `-`.
///
/// Reads at most one byte past the configured limit, so oversized input is
/// rejected without buffering all of it.
pub fn read_source(path: &Path, config: &AnalyzerConfig) -> CliResult<String> {
    let reader: Box<dyn Read> = if path == Path::new("-") {
        Box::new(io::stdin())
    } else {
        Box::new(File::open(path)?)
    };
    read_bounded(reader, config)
}

pub fn read_bounded<R: Read>(reader: R, config: &AnalyzerConfig) -> CliResult<String> {
    let limit = config.max_input_bytes as u64 + 1;
    let mut bytes = Vec::new();
    reader.take(limit).read_to_end(&mut bytes)?;

    // Size first: truncation may have split a multi-byte character.
    if bytes.len() > config.max_input_bytes {
        return Err(Error::InputTooLarge {
            size: bytes.len(),
            limit: config.max_input_bytes,
        }
        .into());
    }

    let text =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text)
}
