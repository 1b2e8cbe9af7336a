pub mod error_handler;

pub use error_handler::{ErrorHandlerMiddleware, ErrorHandlingExt};

/// Header carrying the correlation id, read from requests and echoed back
pub const REQUEST_ID_HEADER: &str = "x-request-id";
