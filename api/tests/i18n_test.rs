//! Tests for per-request language selection

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::Value;

    use fm_api::create_default_app;
    use fm_core::FaultEngine;
    use fm_shared::{HandlingOptions, Language};

    async fn message_for(options: HandlingOptions, accept_language: Option<&str>) -> String {
        let app = test::init_service(create_default_app(FaultEngine::new(options))).await;

        let mut req = test::TestRequest::get().uri("/api/v1/demo/not-found/1");
        if let Some(value) = accept_language {
            req = req.insert_header(("Accept-Language", value));
        }
        let body: Value = test::call_and_read_body_json(&app, req.to_request()).await;
        body["message"].as_str().unwrap_or_default().to_string()
    }

    fn detecting(language: Language) -> HandlingOptions {
        HandlingOptions::builder()
            .active_language(language)
            .detect_request_language(true)
            .log_exceptions(false)
            .build()
            .unwrap()
    }

    #[actix_web::test]
    async fn test_persian_by_default() {
        let message = message_for(HandlingOptions::default(), None).await;
        assert_eq!(message, "موردی یافت نشد.");
    }

    #[actix_web::test]
    async fn test_header_ignored_without_detection() {
        let message = message_for(HandlingOptions::default(), Some("en-US,en;q=0.9")).await;
        assert_eq!(message, "موردی یافت نشد.");
    }

    #[actix_web::test]
    async fn test_detected_languages() {
        assert_eq!(
            message_for(detecting(Language::Persian), Some("en-US,en;q=0.9")).await,
            "Item not found."
        );
        assert_eq!(
            message_for(detecting(Language::English), Some("ar-EG")).await,
            "العنصر غير موجود."
        );
        assert_eq!(
            message_for(detecting(Language::Persian), Some("fr;q=1.0, en;q=0.3, fa;q=0.8")).await,
            "موردی یافت نشد."
        );
    }

    #[actix_web::test]
    async fn test_unsupported_header_uses_configured_language() {
        assert_eq!(
            message_for(detecting(Language::Arabic), Some("de-DE,fr;q=0.5")).await,
            "العنصر غير موجود."
        );
        assert_eq!(message_for(detecting(Language::English), None).await, "Item not found.");
    }

    #[actix_web::test]
    async fn test_override_wins_over_detected_language() {
        let options = HandlingOptions::builder()
            .detect_request_language(true)
            .message_override("NotFound", "404")
            .log_exceptions(false)
            .build()
            .unwrap();

        assert_eq!(message_for(options, Some("ar")).await, "404");
    }
}
