use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use utoipa::ToSchema;

use crate::{Error, InternalResult};

/// Limits applied by the front ends before text reaches the analyzers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzerConfig {
    /// Largest accepted input, in bytes.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl AnalyzerConfig {
    /// Rejects text larger than `max_input_bytes`.
    pub fn check_input(&self, input: &str) -> InternalResult<()> {
        if input.len() > self.max_input_bytes {
            return Err(Error::InputTooLarge {
                size: input.len(),
                limit: self.max_input_bytes,
            });
        }
        Ok(())
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_max_input_bytes() -> usize {
    64 * 1024
}
