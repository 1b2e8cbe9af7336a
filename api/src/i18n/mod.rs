//! Per-request language selection

use actix_web::http::header::{HeaderMap, ACCEPT_LANGUAGE};
use fm_shared::{HandlingOptions, Language};

/// Supported language preferred by the Accept-Language header, if any
pub fn accept_language(headers: &HeaderMap) -> Option<Language> {
    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(Language::from_accept_language)
}

/// Language responses for this request are rendered in.
///
/// The header is only consulted when `detectRequestLanguage` is on; the
/// configured language is used otherwise and as the fallback.
pub fn resolve_language(headers: &HeaderMap, options: &HandlingOptions) -> Language {
    if options.detect_request_language() {
        accept_language(headers).unwrap_or_else(|| options.active_language())
    } else {
        options.active_language()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn detecting() -> HandlingOptions {
        HandlingOptions::builder()
            .active_language(Language::English)
            .detect_request_language(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_detects_header_language() {
        let req = TestRequest::default()
            .insert_header((ACCEPT_LANGUAGE, "ar-SA,en;q=0.5"))
            .to_http_request();
        assert_eq!(resolve_language(req.headers(), &detecting()), Language::Arabic);
    }

    #[test]
    fn test_unsupported_header_falls_back_to_configured() {
        let req = TestRequest::default()
            .insert_header((ACCEPT_LANGUAGE, "de-DE"))
            .to_http_request();
        assert_eq!(resolve_language(req.headers(), &detecting()), Language::English);
    }

    #[test]
    fn test_header_ignored_without_detection() {
        let req = TestRequest::default()
            .insert_header((ACCEPT_LANGUAGE, "ar"))
            .to_http_request();
        assert_eq!(resolve_language(req.headers(), &HandlingOptions::default()), Language::Persian);
    }
}
