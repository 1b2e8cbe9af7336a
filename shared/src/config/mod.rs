//! Configuration module
//!
//! - `environment` - Environment detection and the presets it selects
//! - `handling` - Error classification and response disclosure policy
//! - `server` - HTTP server configuration

pub mod environment;
pub mod handling;
pub mod server;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{ConfigError, ConfigResult};

pub use environment::{Environment, LoggingConfig};
pub use handling::{HandlingOptions, HandlingOptionsBuilder};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Error handling configuration
    #[serde(default)]
    pub error_handling: HandlingOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Presets the environment selects for every section
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            server: environment.server(),
            logging: environment.logging(),
            error_handling: environment.handling_options(),
        }
    }

    pub fn development() -> Self {
        Self::for_environment(Environment::Development)
    }

    pub fn production() -> Self {
        Self::for_environment(Environment::Production)
    }

    /// Load configuration from environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::for_environment(Environment::from_env()).apply_env()
    }

    /// Load configuration from a TOML file, then apply environment overrides.
    ///
    /// A missing file falls back to the preset for the detected environment.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Self::from_env();
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)?.apply_env()
    }

    /// Parse a complete configuration document
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        // Re-run option validation, serde alone does not check override contents
        let error_handling = HandlingOptionsBuilder::from(config.error_handling).build()?;
        Ok(Self { error_handling, ..config })
    }

    fn apply_env(self) -> ConfigResult<Self> {
        Ok(Self {
            server: self.server.apply_env()?,
            error_handling: self.error_handling.apply_env()?,
            ..self
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;
    use std::io::Write;

    #[test]
    fn test_presets() {
        let dev = AppConfig::development();
        assert!(dev.error_handling.show_details());
        assert_eq!(dev.logging.level, "debug");

        let prod = AppConfig::production();
        assert!(prod.is_production());
        assert!(!prod.error_handling.show_details());
        assert!(!prod.error_handling.include_stack_trace());
        assert_eq!(prod.server.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_from_toml_str() {
        let config = AppConfig::from_toml_str(
            r#"
            environment = "staging"

            [server]
            host = "localhost"
            port = 9090

            [error_handling]
            showDetails = true
            language = "en"
            "#,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.server.port, 9090);
        assert!(config.error_handling.show_details());
        assert_eq!(config.error_handling.active_language(), Language::English);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_toml_str_validates_overrides() {
        let result = AppConfig::from_toml_str(
            r#"
            [error_handling.messageOverrides]
            NotFound = "   "
            "#,
        );
        assert!(matches!(result, Err(ConfigError::BlankOverrideMessage { .. })));
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[error_handling]\ngroupFieldViolationsByField = true").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert!(config.error_handling.group_field_violations_by_field());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[error_handling\nbroken").unwrap();

        assert!(matches!(AppConfig::load(file.path()), Err(ConfigError::Parse(_))));
    }
}
