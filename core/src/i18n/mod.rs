//! Message catalog and localization
//!
//! The built-in catalog is embedded at compile time from
//! `i18n/error_messages.toml`. Alternative catalogs can be loaded from TOML
//! and merged over it.

use fm_shared::{HandlingOptions, Language};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Text returned when no override or catalog entry exists for a key
pub const GENERIC_FALLBACK_MESSAGE: &str = "خطا رخ داد.";

static BUILTIN_CATALOG: Lazy<MessageCatalog> = Lazy::new(|| {
    let content = include_str!("../../i18n/error_messages.toml");
    MessageCatalog::from_toml_str(content).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Built-in message catalog is malformed, using an empty catalog");
        MessageCatalog::default()
    })
});

/// Errors raised while loading a message catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read message catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse message catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unsupported language in message catalog: {0}")]
    UnknownLanguage(String),
}

/// Localized messages indexed by language, then message key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: HashMap<Language, HashMap<String, String>>,
}

impl MessageCatalog {
    /// The catalog embedded in the crate
    pub fn builtin() -> &'static MessageCatalog {
        &BUILTIN_CATALOG
    }

    /// Parse a catalog with one table per language code
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, HashMap<String, String>> = toml::from_str(content)?;

        let mut messages = HashMap::with_capacity(raw.len());
        for (code, entries) in raw {
            let language = code
                .parse::<Language>()
                .map_err(|_| CatalogError::UnknownLanguage(code.clone()))?;
            messages.insert(language, entries);
        }

        Ok(Self { messages })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Layer `other` over this catalog; its entries win on conflict
    pub fn merged_with(&self, other: &MessageCatalog) -> MessageCatalog {
        let mut messages = self.messages.clone();
        for (language, entries) in &other.messages {
            let table = messages.entry(*language).or_default();
            for (key, text) in entries {
                table.insert(key.clone(), text.clone());
            }
        }
        MessageCatalog { messages }
    }

    /// Catalog entry for `key` in exactly `language`, no fallback
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.messages
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.get(language, key).is_some()
    }

    /// Languages with at least one entry
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.messages.keys().copied()
    }
}

/// Resolves message keys to display text.
///
/// Resolution order: configured override, catalog entry in the requested
/// language, catalog entry in [`Language::FALLBACK`], then
/// [`GENERIC_FALLBACK_MESSAGE`].
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    catalog: &'a MessageCatalog,
    overrides: &'a HashMap<String, String>,
}

impl<'a> Localizer<'a> {
    pub fn new(catalog: &'a MessageCatalog, options: &'a HandlingOptions) -> Self {
        Self {
            catalog,
            overrides: options.message_overrides(),
        }
    }

    /// Display text for `key` in `language`; never fails
    pub fn resolve(&self, key: &str, language: Language) -> String {
        if let Some(text) = self.overrides.get(key) {
            return text.clone();
        }

        self.catalog
            .get(language, key)
            .or_else(|| self.catalog.get(Language::FALLBACK, key))
            .unwrap_or(GENERIC_FALLBACK_MESSAGE)
            .to_string()
    }

    /// Try each key in turn, then fall back like [`Localizer::resolve`] on the last one
    pub fn resolve_first(&self, keys: &[&str], language: Language) -> String {
        for key in keys {
            if self.overrides.contains_key(*key)
                || self.catalog.contains(language, key)
                || self.catalog.contains(Language::FALLBACK, key)
            {
                return self.resolve(key, language);
            }
        }
        GENERIC_FALLBACK_MESSAGE.to_string()
    }
}
