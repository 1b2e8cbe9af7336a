//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language used to render user-facing error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "fa")]
    Persian,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Default for Language {
    fn default() -> Self {
        Language::FALLBACK
    }
}

impl Language {
    /// Language consulted when the active language has no entry for a key.
    /// Fixed, independent of the configured active language.
    pub const FALLBACK: Language = Language::Persian;

    /// All supported languages, fallback first
    pub const ALL: [Language; 3] = [Language::Persian, Language::English, Language::Arabic];

    /// Pick a language from an Accept-Language header value.
    ///
    /// Entries are weighted by their `q` parameter; the highest weighted
    /// supported language wins, ties go to the earlier entry. Returns `None`
    /// when the header names no supported language.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut preferred: Option<(Language, f32)> = None;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or_default().trim().to_lowercase();
            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            let primary = tag.split('-').next().unwrap_or_default();
            let Ok(language) = primary.parse::<Language>() else {
                continue;
            };

            if quality > 0.0 && preferred.map_or(true, |(_, best)| quality > best) {
                preferred = Some((language, quality));
            }
        }

        preferred.map(|(language, _)| language)
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Persian => "fa",
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Get language name in English
    pub fn name(&self) -> &'static str {
        match self {
            Language::Persian => "Persian",
            Language::English => "English",
            Language::Arabic => "Arabic",
        }
    }

    /// Get native language name
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Persian => "فارسی",
            Language::English => "English",
            Language::Arabic => "العربية",
        }
    }

    /// Get locale code
    pub fn locale(&self) -> &'static str {
        match self {
            Language::Persian => "fa-IR",
            Language::English => "en-US",
            Language::Arabic => "ar-SA",
        }
    }

    /// Check if language uses right-to-left script
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Persian | Language::Arabic)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fa" | "fas" | "per" | "persian" | "farsi" | "فارسی" => Ok(Language::Persian),
            "en" | "eng" | "english" => Ok(Language::English),
            "ar" | "ara" | "arabic" | "العربية" => Ok(Language::Arabic),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_header() {
        assert_eq!(Language::from_accept_language("en-US,en;q=0.9"), Some(Language::English));
        assert_eq!(Language::from_accept_language("fa-IR,fa;q=0.9"), Some(Language::Persian));
        assert_eq!(Language::from_accept_language("AR-EG"), Some(Language::Arabic));
        assert_eq!(Language::from_accept_language("fr-FR,de;q=0.5"), None);
        assert_eq!(Language::from_accept_language(""), None);
    }

    #[test]
    fn test_language_from_header_respects_quality() {
        assert_eq!(
            Language::from_accept_language("en;q=0.4,ar;q=0.8,fa;q=0.6"),
            Some(Language::Arabic)
        );
        assert_eq!(
            Language::from_accept_language("fr, en;q=0.7, fa;q=0.7"),
            Some(Language::English)
        );
        assert_eq!(Language::from_accept_language("en;q=0"), None);
    }

    #[test]
    fn test_language_properties() {
        let en = Language::English;
        assert_eq!(en.code(), "en");
        assert_eq!(en.name(), "English");
        assert_eq!(en.locale(), "en-US");
        assert!(!en.is_rtl());

        let fa = Language::Persian;
        assert_eq!(fa.code(), "fa");
        assert_eq!(fa.native_name(), "فارسی");
        assert!(fa.is_rtl());

        assert!(Language::Arabic.is_rtl());
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("FA".parse::<Language>().unwrap(), Language::Persian);
        assert_eq!("arabic".parse::<Language>().unwrap(), Language::Arabic);
        assert!("zh".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_is_fallback() {
        assert_eq!(Language::default(), Language::FALLBACK);
        assert_eq!(Language::ALL[0], Language::FALLBACK);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Arabic).unwrap(), "\"ar\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
