//! Failure classification
//!
//! Maps an arbitrary raised failure onto the taxonomy. The failure and each
//! of its `source()` causes are tried in turn against an ordered rule table;
//! the first level with a matching rule decides the classification.

mod failure;
mod rules;
mod validation;

#[cfg(test)]
mod tests;

use std::error::Error as StdError;

use crate::errors::ErrorKind;

pub use failure::ClassifiedFailure;
pub use validation::flatten_validation_errors;

/// Causes deeper than this are not inspected
const MAX_CHAIN_DEPTH: usize = 32;

/// Classify a failure; never fails.
///
/// Unrecognized failures become [`ErrorKind::Unhandled`] with the failure's
/// own diagnostic text.
pub fn classify(failure: &(dyn StdError + 'static)) -> ClassifiedFailure {
    let mut current = Some(failure);
    let mut depth = 0;

    while let Some(error) = current {
        if let Some(classified) = rules::apply(error) {
            if depth > 0 {
                tracing::trace!(depth, kind = %classified.kind(), "Classified failure from its cause chain");
            }
            return classified;
        }

        depth += 1;
        if depth >= MAX_CHAIN_DEPTH {
            break;
        }
        current = error.source();
    }

    ClassifiedFailure::new(ErrorKind::Unhandled).with_diagnostic_text(diagnostic_text(failure))
}

/// The failure's direct cause message when it has one, else its own message
pub(crate) fn diagnostic_text(error: &(dyn StdError + 'static)) -> String {
    match error.source() {
        Some(inner) => inner.to_string(),
        None => error.to_string(),
    }
}

/// Display of the failure and every cause, one per line
pub fn render_chain(failure: &(dyn StdError + 'static)) -> String {
    let mut rendered = failure.to_string();
    let mut current = failure.source();
    let mut depth = 1;

    if current.is_some() {
        rendered.push_str("\n\nCaused by:");
    }
    while let Some(cause) = current {
        if depth >= MAX_CHAIN_DEPTH {
            break;
        }
        rendered.push_str(&format!("\n    {}: {cause}", depth - 1));
        current = cause.source();
        depth += 1;
    }
    rendered
}
