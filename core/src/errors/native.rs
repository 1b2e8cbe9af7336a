//! General-purpose failures without a dedicated classification
//!
//! Code that does not want to depend on the taxonomy raises these; the
//! classifier maps them to `InvalidArgument`, `InvalidOperation` and
//! `StorageUpdateFailure`.

use std::error::Error as StdError;
use thiserror::Error;

/// An argument supplied to an operation was unusable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Value cannot be null. (Parameter '{param}')")]
    Null { param: String },

    #[error("{message} (Parameter '{param}')")]
    Invalid { param: String, message: String },

    #[error("Specified argument was out of the range of valid values. (Parameter '{param}')")]
    OutOfRange { param: String },
}

impl ArgumentError {
    pub fn null(param: impl Into<String>) -> Self {
        Self::Null { param: param.into() }
    }

    pub fn invalid(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            param: param.into(),
            message: message.into(),
        }
    }

    pub fn out_of_range(param: impl Into<String>) -> Self {
        Self::OutOfRange { param: param.into() }
    }

    /// Name of the offending parameter
    pub fn param(&self) -> &str {
        match self {
            Self::Null { param } | Self::Invalid { param, .. } | Self::OutOfRange { param } => param,
        }
    }
}

/// The operation is not valid for the current state of the object
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidOperationError {
    message: String,
}

impl InvalidOperationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Persisting a change to the storage layer failed
#[derive(Error, Debug)]
#[error("Failed to update {}", .entity.as_deref().unwrap_or("entity"))]
pub struct StorageUpdateError {
    entity: Option<String>,
    key: Option<String>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl StorageUpdateError {
    pub fn new() -> Self {
        Self {
            entity: None,
            key: None,
            source: None,
        }
    }

    /// Failure to update the record `key` of `entity`
    pub fn for_entity(entity: impl Into<String>, key: impl ToString) -> Self {
        Self {
            entity: Some(entity.into()),
            key: Some(key.to_string()),
            source: None,
        }
    }

    /// Wrap the storage driver's error
    pub fn with_source(mut self, source: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// `"{entity} => {key}"` when the record is known
    pub fn record(&self) -> Option<String> {
        match (&self.entity, &self.key) {
            (Some(entity), Some(key)) => Some(format!("{entity} => {key}")),
            _ => None,
        }
    }
}

impl Default for StorageUpdateError {
    fn default() -> Self {
        Self::new()
    }
}
