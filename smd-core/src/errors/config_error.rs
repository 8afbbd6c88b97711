//! Configuration errors.

use super::error_code::{self, SmdErrorCode};

/// Errors that can occur while parsing or serializing estimator config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config parse error in {source_name}: {message}")]
    ParseError { source_name: String, message: String },

    #[error("Config serialization failed: {message}")]
    SerializeError { message: String },
}

impl SmdErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
