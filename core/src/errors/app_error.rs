//! The failure type raised by application code

use fm_shared::{FieldViolation, Metadata};
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;

use super::ErrorKind;

type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

const ERROR_STATUS_RANGE: std::ops::RangeInclusive<u16> = 400..=599;

/// A failure raised by application code with a dedicated classification.
///
/// Build one through the per-kind constructors and attach optional payload
/// with the `with_*` methods:
///
/// ```
/// use fm_core::errors::AppError;
/// use serde_json::json;
///
/// let err = AppError::not_found().with_metadata(json!({ "orderId": 42 }));
/// ```
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: Option<String>,
    code: Option<String>,
    violations: Vec<FieldViolation>,
    metadata: Option<Metadata>,
    status_override: Option<u16>,
    source: Option<BoxedSource>,
}

impl AppError {
    /// Create a failure of the given kind with no payload
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            code: None,
            violations: Vec::new(),
            metadata: None,
            status_override: None,
            source: None,
        }
    }

    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// Validation failure carrying field violations in their original order
    pub fn validation(violations: impl IntoIterator<Item = FieldViolation>) -> Self {
        Self {
            violations: violations.into_iter().collect(),
            ..Self::new(ErrorKind::Validation)
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorKind::Unauthorized)
    }

    pub fn forbidden() -> Self {
        Self::new(ErrorKind::Forbidden)
    }

    pub fn conflict() -> Self {
        Self::new(ErrorKind::Conflict)
    }

    /// Business rule violation without a classification code
    pub fn business() -> Self {
        Self::new(ErrorKind::Business)
    }

    /// Business rule violation whose code doubles as the message key
    pub fn business_with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::new(ErrorKind::Business)
        }
    }

    pub fn too_many_requests() -> Self {
        Self::new(ErrorKind::TooManyRequests)
    }

    pub fn timeout() -> Self {
        Self::new(ErrorKind::Timeout)
    }

    /// Unprocessable entity, optionally carrying field violations
    pub fn unprocessable_entity(violations: impl IntoIterator<Item = FieldViolation>) -> Self {
        Self {
            violations: violations.into_iter().collect(),
            ..Self::new(ErrorKind::UnprocessableEntity)
        }
    }

    /// Replace the diagnostic message (defaults to the kind's message key)
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach opaque metadata passed through to the response unchanged
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Attach any serializable value as metadata
    pub fn with_metadata_of<T: Serialize>(self, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(metadata) => self.with_metadata(metadata),
            Err(e) => {
                tracing::warn!(error = %e, "Dropping metadata that failed to serialize");
                self
            }
        }
    }

    /// Use a status other than the kind's canonical one.
    ///
    /// Only error statuses (400..=599) are accepted; anything else keeps the
    /// kind's canonical status.
    pub fn with_status(mut self, status: u16) -> Self {
        if ERROR_STATUS_RANGE.contains(&status) {
            self.status_override = Some(status);
        } else {
            tracing::warn!(status, kind = %self.kind, "Ignoring status override outside the error range");
        }
        self
    }

    /// Record the underlying failure that caused this one
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Status to respond with: the raising site's override or the canonical code
    pub fn status_code(&self) -> u16 {
        self.status_override.unwrap_or_else(|| self.kind.status_code())
    }

    /// Business classification code, if a non-blank one was supplied
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.trim().is_empty())
    }

    /// Field violations; empty for kinds that do not carry them
    pub fn violations(&self) -> &[FieldViolation] {
        if self.kind.carries_field_violations() {
            &self.violations
        } else {
            &[]
        }
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None if !self.violations.is_empty() => write!(
                f,
                "{} ({} field violation(s))",
                self.kind.message_key(),
                self.violations.len()
            ),
            None => f.write_str(self.kind.message_key()),
        }
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for AppError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
