//! Per-request inputs to response assembly

use fm_shared::Language;
use uuid::Uuid;

/// Correlation id and language resolved once for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub correlation_id: String,
    pub language: Language,
}

impl RequestContext {
    pub fn new(correlation_id: impl Into<String>, language: Language) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            language,
        }
    }

    /// Context with a freshly generated correlation id
    pub fn generated(language: Language) -> Self {
        Self::new(Uuid::new_v4().to_string(), language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = RequestContext::generated(Language::English);
        let b = RequestContext::generated(Language::English);
        assert_ne!(a.correlation_id, b.correlation_id);
        assert!(Uuid::parse_str(&a.correlation_id).is_ok());
    }
}
