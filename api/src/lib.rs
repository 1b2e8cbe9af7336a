//! # FaultMap API
//!
//! actix-web integration of the FaultMap error engine: the error-handling
//! middleware, the handler error type and a demo server.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;

pub use app::{create_app, create_default_app};
pub use handlers::{ApiError, ApiResult};
pub use middleware::ErrorHandlerMiddleware;
