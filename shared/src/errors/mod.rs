//! Shared error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
///
/// Only startup code sees these; the error engine itself never fails.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Message override key must not be blank")]
    BlankOverrideKey,

    #[error("Message override for {key} must not be blank")]
    BlankOverrideMessage { key: String },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
