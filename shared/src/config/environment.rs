//! Deployment environments and the presets they select

use serde::{Deserialize, Serialize};
use std::env;
use strum::{Display, EnumString};

use super::{HandlingOptions, ServerConfig};

/// Variables consulted in order; the first one set decides
const ENVIRONMENT_VARS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Where the server runs.
///
/// Each environment picks its own disclosure policy, log verbosity and bind
/// address. Only development reveals diagnostics and stack traces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    #[default]
    #[strum(to_string = "development", serialize = "dev")]
    Development,
    #[strum(to_string = "staging", serialize = "stage", serialize = "test")]
    Staging,
    #[strum(to_string = "production", serialize = "prod")]
    Production,
}

impl Environment {
    /// Detect from `ENVIRONMENT`, `ENV` or `RUST_ENV`; unknown values mean development
    pub fn from_env() -> Self {
        ENVIRONMENT_VARS
            .iter()
            .find_map(|key| env::var(key).ok())
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or_default()
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn handling_options(self) -> HandlingOptions {
        match self {
            Environment::Development => HandlingOptions::development(),
            Environment::Staging | Environment::Production => HandlingOptions::production(),
        }
    }

    pub fn logging(self) -> LoggingConfig {
        match self {
            Environment::Development => LoggingConfig {
                level: String::from("debug"),
                colored: true,
                source_location: true,
            },
            Environment::Staging => LoggingConfig::default(),
            Environment::Production => LoggingConfig {
                level: String::from("warn"),
                colored: false,
                source_location: false,
            },
        }
    }

    /// Development binds to loopback, deployed environments to every interface
    pub fn server(self) -> ServerConfig {
        match self {
            Environment::Development => ServerConfig::default(),
            Environment::Staging | Environment::Production => ServerConfig::new("0.0.0.0", 8080),
        }
    }
}

/// Settings handed to `env_logger` by the server binary
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `fm_core=debug,actix_web=info`
    pub level: String,

    #[serde(default)]
    pub colored: bool,

    /// Prefix records with file and line
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            colored: false,
            source_location: false,
        }
    }
}
