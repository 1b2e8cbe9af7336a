//! Server configuration loading

pub mod error_config;

use fm_shared::{AppConfig, ConfigResult};
use std::env;

pub use error_config::ErrorConfig;

/// Configuration file used when `APP_CONFIG_PATH` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/faultmap.toml";

/// Load the application configuration.
///
/// Reads the TOML file named by `APP_CONFIG_PATH` (or the default path),
/// then applies environment overrides. A missing file is not an error.
pub fn load() -> ConfigResult<AppConfig> {
    let path = env::var("APP_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    AppConfig::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../config/faultmap.toml");
        let content = std::fs::read_to_string(path).unwrap();
        let config = AppConfig::from_toml_str(&content).unwrap();

        assert!(config.error_handling.detect_request_language());
        assert!(config.error_handling.message_override("UnexpectedError").is_some());
        assert_eq!(config.server.port, 8080);
    }
}
