use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::{SignupRequest, SignupResponse};
use crate::handlers::ApiResult;
use crate::middleware::ErrorHandlingExt;

/// Handler for POST /signup
///
/// Validates the body with `validator`; violations are reported as
/// field errors.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "someone@example.com",
///     "age": 30,
///     "address": { "city": "Tehran", "postal_code": "11369" }
/// }
/// ```
pub async fn signup(req: HttpRequest, body: web::Json<SignupRequest>) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    body.validate()?;

    log::info!("Accepted signup for {}", body.email);

    Ok(HttpResponse::Created().json(SignupResponse {
        email: body.email,
        request_id: req.request_id(),
    }))
}
