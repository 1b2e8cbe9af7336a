//! Failure taxonomy and the failure shapes application code raises.

mod app_error;
mod kind;
mod native;

#[cfg(test)]
mod tests;

pub use app_error::AppError;
pub use kind::ErrorKind;
pub use native::{ArgumentError, InvalidOperationError, StorageUpdateError};

/// Result type for application code raising [`AppError`]
pub type AppResult<T> = Result<T, AppError>;
