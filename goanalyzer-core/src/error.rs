use thiserror::Error;

/// Errors raised at the boundary of the analysis pipeline.
///
/// The analyzers themselves never fail: lexical anomalies become `ERR`
/// tokens and rule breaches become report entries. These variants cover
/// what happens around them (input limits and configuration loading).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Input too large: {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Config error: {0}")]
    Config(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::InputTooLarge {
            size: 70_000,
            limit: 65_536,
        };
        assert_eq!(
            error.to_string(),
            "Input too large: 70000 bytes exceeds the limit of 65536 bytes"
        );
        assert_eq!(
            Error::config("bad json").to_string(),
            "Config error: bad json"
        );
    }
}
