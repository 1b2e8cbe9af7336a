//! Response assembly
//!
//! Applies the disclosure and grouping policy of [`HandlingOptions`] to a
//! classified failure.

use chrono::Utc;
use fm_shared::{group_by_field, ErrorResponse, HandlingOptions};

use crate::classifier::ClassifiedFailure;
use crate::context::RequestContext;

/// Build the response record for a classified failure.
///
/// `details` and `stackTrace` are only filled when their flag is on. A failure
/// without a captured trace reports its diagnostic text as the trace, or an
/// empty trace when it has neither. Field violations land in exactly one of
/// `fieldErrors` or `groupedFieldErrors`.
pub fn assemble(
    classified: &ClassifiedFailure,
    message: String,
    context: &RequestContext,
    options: &HandlingOptions,
) -> ErrorResponse {
    let details = if options.show_details() {
        classified.diagnostic_text().map(str::to_string)
    } else {
        None
    };

    let stack_trace = options.include_stack_trace().then(|| {
        classified
            .stack_trace()
            .or(classified.diagnostic_text())
            .unwrap_or_default()
            .to_string()
    });

    let (field_errors, grouped_field_errors) = match classified.field_violations() {
        Some(violations) if options.group_field_violations_by_field() => (None, Some(group_by_field(violations))),
        Some(violations) => (Some(violations.to_vec()), None),
        None => (None, None),
    };

    ErrorResponse {
        status_code: classified.status_code(),
        message,
        details,
        stack_trace,
        field_errors,
        grouped_field_errors,
        trace_id: context.correlation_id.clone(),
        timestamp: Utc::now(),
        metadata: classified.metadata().cloned(),
    }
}
