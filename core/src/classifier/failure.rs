use fm_shared::{FieldViolation, Metadata};

use crate::errors::ErrorKind;

/// Result of classifying a raised failure
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedFailure {
    kind: ErrorKind,
    status_code: u16,
    message_key_override: Option<String>,
    field_violations: Option<Vec<FieldViolation>>,
    metadata: Option<Metadata>,
    diagnostic_text: Option<String>,
    stack_trace: Option<String>,
}

impl ClassifiedFailure {
    /// Classification with the kind's canonical status and no payload
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            status_code: kind.status_code(),
            message_key_override: None,
            field_violations: None,
            metadata: None,
            diagnostic_text: None,
            stack_trace: None,
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// Blank keys are ignored
    pub fn with_message_key(mut self, key: Option<&str>) -> Self {
        self.message_key_override = key
            .filter(|key| !key.trim().is_empty())
            .map(str::to_string);
        self
    }

    /// Ignored for kinds that do not carry field violations and for empty lists
    pub fn with_field_violations(mut self, violations: Vec<FieldViolation>) -> Self {
        if self.kind.carries_field_violations() && !violations.is_empty() {
            self.field_violations = Some(violations);
        }
        self
    }

    pub fn with_metadata(mut self, metadata: Option<Metadata>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_diagnostic_text(mut self, text: impl Into<String>) -> Self {
        self.diagnostic_text = Some(text.into());
        self
    }

    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message_key_override(&self) -> Option<&str> {
        self.message_key_override.as_deref()
    }

    /// Key the message is rendered from: the override, else the kind's default
    pub fn message_key(&self) -> &str {
        self.message_key_override
            .as_deref()
            .unwrap_or_else(|| self.kind.message_key())
    }

    /// Keys to try in order when localizing
    pub fn message_keys(&self) -> Vec<&str> {
        match self.message_key_override.as_deref() {
            Some(key) if key != self.kind.message_key() => vec![key, self.kind.message_key()],
            _ => vec![self.kind.message_key()],
        }
    }

    pub fn field_violations(&self) -> Option<&[FieldViolation]> {
        self.field_violations.as_deref()
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn diagnostic_text(&self) -> Option<&str> {
        self.diagnostic_text.as_deref()
    }

    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }
}
