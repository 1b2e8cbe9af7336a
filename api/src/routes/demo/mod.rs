//! Demo endpoints raising each failure category
//!
//! Mounted under `/api/v1/demo` for manual exploration of the rendered
//! error responses.

pub mod failures;
pub mod signup;

use actix_web::web;

/// Register the demo routes on a scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/not-found/{id}", web::get().to(failures::not_found))
        .route("/validation", web::get().to(failures::validation))
        .route("/business/{code}", web::get().to(failures::business))
        .route("/conflict", web::get().to(failures::conflict))
        .route("/parse/{value}", web::get().to(failures::parse))
        .route("/invalid-operation", web::get().to(failures::invalid_operation))
        .route("/storage", web::get().to(failures::storage))
        .route("/timeout", web::get().to(failures::timeout))
        .route("/status/{status}", web::get().to(failures::status))
        .route("/unhandled", web::get().to(failures::unhandled))
        .route("/signup", web::post().to(signup::signup));
}
