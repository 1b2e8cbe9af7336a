//! Error handling configuration
//!
//! `HandlingOptions` is built once at startup and shared read-only by every
//! request. Changing behavior means building a new value; there are no
//! setters on a constructed instance.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::Path;

use crate::errors::{ConfigError, ConfigResult};
use crate::types::Language;

/// Policy driving message localization and response disclosure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HandlingOptions {
    /// Include the failure's diagnostic text in responses
    show_details: bool,

    /// Include the captured stack trace in responses
    include_stack_trace: bool,

    /// Ask the transport layer to log every handled failure
    log_exceptions: bool,

    /// Language messages are rendered in
    #[serde(rename = "activeLanguage", alias = "language")]
    active_language: Language,

    /// Per message key replacements that win over the catalog in every language
    message_overrides: HashMap<String, String>,

    /// Render field violations grouped by field instead of as a flat list
    group_field_violations_by_field: bool,

    /// Let the transport pick the language from Accept-Language
    detect_request_language: bool,
}

impl Default for HandlingOptions {
    fn default() -> Self {
        Self {
            show_details: false,
            include_stack_trace: false,
            log_exceptions: true,
            active_language: Language::default(),
            message_overrides: HashMap::new(),
            group_field_violations_by_field: false,
            detect_request_language: false,
        }
    }
}

impl HandlingOptions {
    /// Start building options from the defaults
    pub fn builder() -> HandlingOptionsBuilder {
        HandlingOptionsBuilder::default()
    }

    /// Production configuration: minimum disclosure
    pub fn production() -> Self {
        Self::default()
    }

    /// Development configuration: diagnostics and stack traces included
    pub fn development() -> Self {
        Self {
            show_details: true,
            include_stack_trace: true,
            ..Self::default()
        }
    }

    /// Parse options from a TOML document using the camelCase option names
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `ERROR_*` environment variable overrides on top of these options
    pub fn apply_env(self) -> ConfigResult<Self> {
        let mut builder = HandlingOptionsBuilder::from(self);

        if let Some(value) = env_flag("ERROR_SHOW_DETAILS")? {
            builder = builder.show_details(value);
        }
        if let Some(value) = env_flag("ERROR_INCLUDE_STACK_TRACE")? {
            builder = builder.include_stack_trace(value);
        }
        if let Some(value) = env_flag("ERROR_LOG_EXCEPTIONS")? {
            builder = builder.log_exceptions(value);
        }
        if let Some(value) = env_flag("ERROR_GROUP_FIELD_VIOLATIONS")? {
            builder = builder.group_field_violations_by_field(value);
        }
        if let Some(value) = env_flag("ERROR_DETECT_LANGUAGE")? {
            builder = builder.detect_request_language(value);
        }
        if let Ok(value) = env::var("ERROR_LANGUAGE") {
            let language = value.parse::<Language>().map_err(|_| ConfigError::InvalidValue {
                key: "ERROR_LANGUAGE".to_string(),
                value: value.clone(),
                expected: "one of fa, en, ar",
            })?;
            builder = builder.active_language(language);
        }

        builder.build()
    }

    pub fn show_details(&self) -> bool {
        self.show_details
    }

    pub fn include_stack_trace(&self) -> bool {
        self.include_stack_trace
    }

    pub fn log_exceptions(&self) -> bool {
        self.log_exceptions
    }

    pub fn active_language(&self) -> Language {
        self.active_language
    }

    pub fn message_overrides(&self) -> &HashMap<String, String> {
        &self.message_overrides
    }

    /// Override text for a message key, if one is configured
    pub fn message_override(&self, key: &str) -> Option<&str> {
        self.message_overrides.get(key).map(String::as_str)
    }

    pub fn group_field_violations_by_field(&self) -> bool {
        self.group_field_violations_by_field
    }

    pub fn detect_request_language(&self) -> bool {
        self.detect_request_language
    }

    fn validate(&self) -> ConfigResult<()> {
        for (key, message) in &self.message_overrides {
            if key.trim().is_empty() {
                return Err(ConfigError::BlankOverrideKey);
            }
            if message.trim().is_empty() {
                return Err(ConfigError::BlankOverrideMessage { key: key.clone() });
            }
        }
        Ok(())
    }
}

/// Builder for [`HandlingOptions`]; `build` validates the result
#[derive(Debug, Clone, Default)]
pub struct HandlingOptionsBuilder {
    options: HandlingOptions,
}

impl From<HandlingOptions> for HandlingOptionsBuilder {
    fn from(options: HandlingOptions) -> Self {
        Self { options }
    }
}

impl HandlingOptionsBuilder {
    pub fn show_details(mut self, enabled: bool) -> Self {
        self.options.show_details = enabled;
        self
    }

    pub fn include_stack_trace(mut self, enabled: bool) -> Self {
        self.options.include_stack_trace = enabled;
        self
    }

    pub fn log_exceptions(mut self, enabled: bool) -> Self {
        self.options.log_exceptions = enabled;
        self
    }

    pub fn active_language(mut self, language: Language) -> Self {
        self.options.active_language = language;
        self
    }

    pub fn message_override(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.options.message_overrides.insert(key.into(), message.into());
        self
    }

    pub fn group_field_violations_by_field(mut self, enabled: bool) -> Self {
        self.options.group_field_violations_by_field = enabled;
        self
    }

    pub fn detect_request_language(mut self, enabled: bool) -> Self {
        self.options.detect_request_language = enabled;
        self
    }

    pub fn build(self) -> ConfigResult<HandlingOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}

/// Read a boolean flag from the environment; unset means `None`
fn env_flag(key: &str) -> ConfigResult<Option<bool>> {
    let Ok(raw) = env::var(key) else {
        return Ok(None);
    };
    parse_flag(&raw).map(Some).ok_or_else(|| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw,
        expected: "a boolean",
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_disclose_nothing() {
        let options = HandlingOptions::default();
        assert!(!options.show_details());
        assert!(!options.include_stack_trace());
        assert!(options.log_exceptions());
        assert_eq!(options.active_language(), Language::Persian);
        assert!(options.message_overrides().is_empty());
        assert!(!options.group_field_violations_by_field());
        assert!(!options.detect_request_language());
    }

    #[test]
    fn test_presets() {
        assert_eq!(HandlingOptions::production(), HandlingOptions::default());

        let dev = HandlingOptions::development();
        assert!(dev.show_details());
        assert!(dev.include_stack_trace());
    }

    #[test]
    fn test_builder() {
        let options = HandlingOptions::builder()
            .show_details(true)
            .active_language(Language::English)
            .message_override("NotFound", "Nothing here")
            .group_field_violations_by_field(true)
            .build()
            .unwrap();

        assert!(options.show_details());
        assert_eq!(options.active_language(), Language::English);
        assert_eq!(options.message_override("NotFound"), Some("Nothing here"));
        assert_eq!(options.message_override("Conflict"), None);
        assert!(options.group_field_violations_by_field());
    }

    #[test]
    fn test_builder_rejects_blank_overrides() {
        let err = HandlingOptions::builder()
            .message_override("  ", "text")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::BlankOverrideKey));

        let err = HandlingOptions::builder()
            .message_override("NotFound", "")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::BlankOverrideMessage { key } if key == "NotFound"));
    }

    #[test]
    fn test_from_toml_camel_case() {
        let options = HandlingOptions::from_toml_str(
            r#"
            showDetails = true
            includeStackTrace = true
            logExceptions = false
            language = "ar"
            groupFieldViolationsByField = true

            [messageOverrides]
            NotFound = "Custom not found"
            "#,
        )
        .unwrap();

        assert!(options.show_details());
        assert!(options.include_stack_trace());
        assert!(!options.log_exceptions());
        assert_eq!(options.active_language(), Language::Arabic);
        assert!(options.group_field_violations_by_field());
        assert_eq!(options.message_override("NotFound"), Some("Custom not found"));
    }

    #[test]
    fn test_from_toml_accepts_short_language_key() {
        let options = HandlingOptions::from_toml_str("activeLanguage = \"en\"").unwrap();
        assert_eq!(options.active_language(), Language::English);
        let short = HandlingOptions::from_toml_str("language = \"en\"").unwrap();
        assert_eq!(short, options);
    }

    #[test]
    fn test_serializes_option_names() {
        let options = HandlingOptions::builder()
            .active_language(Language::Arabic)
            .build()
            .unwrap();
        let json = serde_json::to_value(&options).unwrap();

        assert_eq!(json["activeLanguage"], "ar");
        assert!(json.get("language").is_none());
        assert_eq!(json["showDetails"], false);
    }

    #[test]
    fn test_from_toml_rejects_unknown_language_and_keys() {
        assert!(matches!(
            HandlingOptions::from_toml_str("language = \"zh\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            HandlingOptions::from_toml_str("showDetail = true"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" on "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
