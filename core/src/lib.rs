//! # FaultMap Core
//!
//! Turns any failure raised while serving a request into a uniform
//! [`ErrorResponse`](fm_shared::ErrorResponse): the failure taxonomy, the
//! classifier, message localization and response assembly.
//!
//! ```
//! use fm_core::{AppError, FaultEngine};
//! use fm_shared::{HandlingOptions, Language};
//!
//! let options = HandlingOptions::builder()
//!     .active_language(Language::English)
//!     .build()
//!     .unwrap();
//! let engine = FaultEngine::new(options);
//!
//! let failure = anyhow::Error::new(AppError::not_found());
//! let response = engine.classify_and_render(&failure, &engine.context("req-1"));
//!
//! assert_eq!(response.status_code, 404);
//! assert_eq!(response.message, "Item not found.");
//! ```

pub mod assembler;
pub mod classifier;
pub mod context;
pub mod engine;
pub mod errors;
pub mod i18n;
pub mod logging;

// Re-export commonly used types for convenience
pub use classifier::{classify, ClassifiedFailure};
pub use context::RequestContext;
pub use engine::FaultEngine;
pub use errors::{AppError, AppResult, ArgumentError, ErrorKind, InvalidOperationError, StorageUpdateError};
pub use i18n::{CatalogError, Localizer, MessageCatalog, GENERIC_FALLBACK_MESSAGE};
pub use logging::{ExceptionLogger, ExceptionNotifier, TracingExceptionLogger};
