//! Type definitions shared by the engine and the transport layer
//!
//! - `language` - Languages error messages can be rendered in
//! - `response` - The error response wire record and field violations

pub mod language;
pub mod response;

pub use language::Language;
pub use response::{group_by_field, ErrorResponse, FieldViolation, GroupedFieldErrors, Metadata};
