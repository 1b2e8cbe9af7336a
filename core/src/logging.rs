//! Collaborators the transport layer invokes around a handled failure

use async_trait::async_trait;
use fm_shared::ErrorResponse;

use crate::classifier::classify;

/// Records a handled failure.
///
/// Called by the transport layer when `logExceptions` is on; the engine
/// itself never logs through it.
pub trait ExceptionLogger: Send + Sync {
    fn log(&self, failure: &anyhow::Error, correlation_id: &str);
}

/// Emits one `tracing` error event per failure
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingExceptionLogger;

impl ExceptionLogger for TracingExceptionLogger {
    fn log(&self, failure: &anyhow::Error, correlation_id: &str) {
        let classified = classify(&**failure);
        let span = tracing::error_span!("handled_failure", trace_id = %correlation_id);
        let _entered = span.enter();

        tracing::error!(
            correlation_id = %correlation_id,
            kind = %classified.kind(),
            status = classified.status_code(),
            "Request failed: {failure:?}"
        );
    }
}

/// Forwards a handled failure and its response to an external channel
/// (chat, paging, error tracker). Cannot change the response.
#[async_trait]
pub trait ExceptionNotifier: Send + Sync {
    async fn notify(&self, failure: &anyhow::Error, response: &ErrorResponse);
}
