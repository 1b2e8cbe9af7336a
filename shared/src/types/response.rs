//! Error response wire types

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque caller-supplied payload carried through to the response unchanged
pub type Metadata = serde_json::Value;

/// Field violations grouped by field name, in first-seen field order
pub type GroupedFieldErrors = IndexMap<String, Vec<String>>;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field path, e.g. "email" or "address.city"
    pub field: String,

    /// Human-readable description of the violation
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Group violations by field, preserving first-seen field order and the
/// original order of messages inside each group.
pub fn group_by_field(violations: &[FieldViolation]) -> GroupedFieldErrors {
    let mut grouped = GroupedFieldErrors::new();
    for violation in violations {
        grouped
            .entry(violation.field.clone())
            .or_default()
            .push(violation.message.clone());
    }
    grouped
}

/// Uniform error record returned to clients for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status code
    pub status_code: u16,

    /// Localized, user-facing message
    pub message: String,

    /// Diagnostic text of the failure (only when detail disclosure is on)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Captured stack trace (only when stack-trace disclosure is on)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,

    /// Field violations in original order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldViolation>>,

    /// Field violations grouped by field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouped_field_errors: Option<GroupedFieldErrors>,

    /// Correlation id of the request
    pub trace_id: String,

    /// When the response was assembled
    pub timestamp: DateTime<Utc>,

    /// Caller-supplied metadata, `null` when absent
    pub metadata: Option<Metadata>,
}

impl ErrorResponse {
    /// Create a minimal error response
    pub fn new(status_code: u16, message: impl Into<String>, trace_id: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            details: None,
            stack_trace: None,
            field_errors: None,
            grouped_field_errors: None,
            trace_id: trace_id.into(),
            timestamp: Utc::now(),
            metadata: None,
        }
    }

    /// Check whether any field-level errors are attached, in either shape
    pub fn has_field_errors(&self) -> bool {
        self.field_errors.as_ref().is_some_and(|v| !v.is_empty())
            || self.grouped_field_errors.as_ref().is_some_and(|g| !g.is_empty())
    }
}
