//! Server configuration module

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,  // Use all CPU cores
            keep_alive: default_keep_alive(),
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Override host and port from `SERVER_HOST` / `SERVER_PORT`
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("SERVER_PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT".to_string(),
                value: port.clone(),
                expected: "a port number",
            })?;
        }
        Ok(self)
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_keep_alive() -> u64 {
    75  // 75 seconds
}

fn default_max_payload_size() -> usize {
    256 * 1024  // 256 KB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.workers, 0);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_config_new() {
        let config = ServerConfig::new("0.0.0.0", 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.keep_alive, 75);
    }

    #[test]
    fn test_server_config_from_toml_uses_defaults() {
        let config: ServerConfig = toml::from_str("host = \"localhost\"\nport = 9000").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.max_payload_size, 256 * 1024);
    }
}
