use actix_web::HttpResponse;
use fm_core::AppError;

use crate::handlers::ApiResult;

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "faultmap-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(AppError::not_found().into())
}
