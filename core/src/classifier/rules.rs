//! The ordered rule table, most specific first

use std::error::Error as StdError;
use std::io;
use std::num::{ParseFloatError, ParseIntError, TryFromIntError};
use std::str::ParseBoolError;

use validator::ValidationErrors;

use super::validation::flatten_validation_errors;
use super::{diagnostic_text, ClassifiedFailure};
use crate::errors::{AppError, ArgumentError, ErrorKind, InvalidOperationError, StorageUpdateError};

type Rule = fn(&(dyn StdError + 'static)) -> Option<ClassifiedFailure>;

/// Failure shapes with a dedicated kind come before the generic native
/// shapes. Anything left unmatched is `Unhandled`.
const RULES: &[(&str, Rule)] = &[
    ("app_error", app_error),
    ("validation_errors", validation_errors),
    ("storage_update", storage_update),
    ("invalid_argument", invalid_argument),
    ("invalid_operation", invalid_operation),
    ("timed_out", timed_out),
];

/// First matching rule for this error alone, causes are not inspected
pub(super) fn apply(error: &(dyn StdError + 'static)) -> Option<ClassifiedFailure> {
    RULES.iter().find_map(|(name, rule)| {
        let classified = rule(error)?;
        tracing::trace!(rule = name, kind = %classified.kind(), "Failure matched");
        Some(classified)
    })
}

fn app_error(error: &(dyn StdError + 'static)) -> Option<ClassifiedFailure> {
    let app = error.downcast_ref::<AppError>()?;

    Some(
        ClassifiedFailure::new(app.kind())
            .with_status(app.status_code())
            .with_message_key(app.code())
            .with_field_violations(app.violations().to_vec())
            .with_metadata(app.metadata().cloned())
            .with_diagnostic_text(diagnostic_text(error)),
    )
}

fn validation_errors(error: &(dyn StdError + 'static)) -> Option<ClassifiedFailure> {
    let errors = error.downcast_ref::<ValidationErrors>()?;

    Some(
        ClassifiedFailure::new(ErrorKind::Validation)
            .with_field_violations(flatten_validation_errors(errors))
            .with_diagnostic_text(diagnostic_text(error)),
    )
}

fn storage_update(error: &(dyn StdError + 'static)) -> Option<ClassifiedFailure> {
    let storage = error.downcast_ref::<StorageUpdateError>()?;
    let text = storage.record().unwrap_or_else(|| diagnostic_text(error));

    Some(ClassifiedFailure::new(ErrorKind::StorageUpdateFailure).with_diagnostic_text(text))
}

fn invalid_argument(error: &(dyn StdError + 'static)) -> Option<ClassifiedFailure> {
    let matched = error.is::<ArgumentError>()
        || error.is::<ParseIntError>()
        || error.is::<ParseFloatError>()
        || error.is::<ParseBoolError>()
        || error.is::<TryFromIntError>()
        || error.is::<uuid::Error>()
        || error.is::<chrono::ParseError>();

    matched.then(|| ClassifiedFailure::new(ErrorKind::InvalidArgument).with_diagnostic_text(diagnostic_text(error)))
}

fn invalid_operation(error: &(dyn StdError + 'static)) -> Option<ClassifiedFailure> {
    error.downcast_ref::<InvalidOperationError>()?;
    Some(ClassifiedFailure::new(ErrorKind::InvalidOperation).with_diagnostic_text(diagnostic_text(error)))
}

fn timed_out(error: &(dyn StdError + 'static)) -> Option<ClassifiedFailure> {
    let io_error = error.downcast_ref::<io::Error>()?;
    (io_error.kind() == io::ErrorKind::TimedOut)
        .then(|| ClassifiedFailure::new(ErrorKind::Timeout).with_diagnostic_text(diagnostic_text(error)))
}
