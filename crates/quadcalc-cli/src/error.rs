//! Error types for the CLI

use quadcalc::core::Rejection;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Snapshot could not be serialized
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A keypad input was refused while running with `--strict`
    #[error("Input {token:?} rejected: {rejection}")]
    Rejected {
        /// The token that was refused
        token: String,
        /// Why it was refused
        #[source]
        rejection: Rejection,
    },
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a rejection error
    #[must_use]
    pub fn rejected(token: impl Into<String>, rejection: Rejection) -> Self {
        Self::Rejected {
            token: token.into(),
            rejection,
        }
    }
}
