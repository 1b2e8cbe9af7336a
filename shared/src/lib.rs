//! Shared types and configuration for FaultMap
//!
//! This crate provides the pieces used on both sides of the error engine:
//! - Configuration types (`HandlingOptions`, `AppConfig`)
//! - The `ErrorResponse` wire record and field violations
//! - Supported languages

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, HandlingOptions, HandlingOptionsBuilder, LoggingConfig, ServerConfig,
};
pub use errors::{ConfigError, ConfigResult};
pub use types::{
    group_by_field, ErrorResponse, FieldViolation, GroupedFieldErrors, Language, Metadata,
};
