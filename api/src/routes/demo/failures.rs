use actix_web::{web, HttpResponse};
use anyhow::Context;
use fm_core::{AppError, ErrorKind, InvalidOperationError, StorageUpdateError};
use fm_shared::FieldViolation;
use serde_json::json;
use std::io;

use crate::handlers::ApiResult;

/// GET /not-found/{id}
pub async fn not_found(path: web::Path<u64>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    Err(AppError::not_found()
        .with_message(format!("Order {id} does not exist"))
        .with_metadata(json!({ "orderId": id }))
        .into())
}

/// GET /validation
pub async fn validation() -> ApiResult<HttpResponse> {
    Err(AppError::validation([
        FieldViolation::new("email", "required"),
        FieldViolation::new("email", "invalid format"),
        FieldViolation::new("age", "must be positive"),
    ])
    .into())
}

/// GET /business/{code}
pub async fn business(path: web::Path<String>) -> ApiResult<HttpResponse> {
    Err(AppError::business_with_code(path.into_inner()).into())
}

/// GET /conflict
pub async fn conflict() -> ApiResult<HttpResponse> {
    let duplicate = AppError::conflict().with_message("Order 7 was already paid");
    Err(anyhow::Error::new(duplicate).context("capturing payment").into())
}

/// GET /parse/{value}
pub async fn parse(path: web::Path<String>) -> ApiResult<HttpResponse> {
    let quantity: u32 = path.parse()?;
    Ok(HttpResponse::Ok().json(json!({ "quantity": quantity })))
}

/// GET /invalid-operation
pub async fn invalid_operation() -> ApiResult<HttpResponse> {
    Err(InvalidOperationError::new("Cannot cancel a shipped order").into())
}

/// GET /storage
pub async fn storage() -> ApiResult<HttpResponse> {
    let driver = io::Error::new(io::ErrorKind::Other, "deadlock detected");
    Err(StorageUpdateError::for_entity("Order", 7).with_source(driver).into())
}

/// GET /timeout
pub async fn timeout() -> ApiResult<HttpResponse> {
    let elapsed = io::Error::new(io::ErrorKind::TimedOut, "inventory service did not answer");
    Err(anyhow::Error::new(elapsed).context("reserving stock").into())
}

/// GET /status/{status}
pub async fn status(path: web::Path<u16>) -> ApiResult<HttpResponse> {
    let kind = ErrorKind::from_status(path.into_inner()).unwrap_or(ErrorKind::Unhandled);
    Err(AppError::new(kind).into())
}

/// GET /unhandled
pub async fn unhandled() -> ApiResult<HttpResponse> {
    let gateway: Option<&str> = None;
    let gateway = gateway.context("payment gateway is not configured")?;
    Ok(HttpResponse::Ok().json(json!({ "gateway": gateway })))
}
