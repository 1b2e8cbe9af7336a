//! The single entry point the transport layer calls

use fm_shared::{ErrorResponse, HandlingOptions};
use std::error::Error as StdError;
use std::sync::Arc;

use crate::assembler::assemble;
use crate::classifier::{classify, render_chain, ClassifiedFailure};
use crate::context::RequestContext;
use crate::i18n::{Localizer, MessageCatalog};

/// Classifies failures and renders them into [`ErrorResponse`] records.
///
/// Options and catalog are immutable and shared; cloning an engine is cheap.
/// Reconfiguring means building a new engine.
#[derive(Debug, Clone)]
pub struct FaultEngine {
    options: Arc<HandlingOptions>,
    catalog: Arc<MessageCatalog>,
}

impl Default for FaultEngine {
    fn default() -> Self {
        Self::new(HandlingOptions::default())
    }
}

impl FaultEngine {
    /// Engine using the built-in message catalog
    pub fn new(options: HandlingOptions) -> Self {
        Self::with_catalog(options, MessageCatalog::builtin().clone())
    }

    pub fn with_catalog(options: HandlingOptions, catalog: MessageCatalog) -> Self {
        Self {
            options: Arc::new(options),
            catalog: Arc::new(catalog),
        }
    }

    /// A new engine sharing this one's catalog
    pub fn with_options(&self, options: HandlingOptions) -> Self {
        Self {
            options: Arc::new(options),
            catalog: Arc::clone(&self.catalog),
        }
    }

    pub fn options(&self) -> &HandlingOptions {
        &self.options
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    pub fn localizer(&self) -> Localizer<'_> {
        Localizer::new(&self.catalog, &self.options)
    }

    /// Classify a raised failure and render its response record
    pub fn classify_and_render(&self, failure: &anyhow::Error, context: &RequestContext) -> ErrorResponse {
        let classified = classify(&**failure).with_stack_trace(format!("{failure:?}"));
        self.render(&classified, context)
    }

    /// Same as [`FaultEngine::classify_and_render`] for failures outside `anyhow`
    pub fn render_error(&self, failure: &(dyn StdError + 'static), context: &RequestContext) -> ErrorResponse {
        let classified = self.classify_error(failure);
        self.render(&classified, context)
    }

    /// Classification only, with the cause chain as stack trace
    pub fn classify_error(&self, failure: &(dyn StdError + 'static)) -> ClassifiedFailure {
        classify(failure).with_stack_trace(render_chain(failure))
    }

    /// Localize and assemble an already classified failure
    pub fn render(&self, classified: &ClassifiedFailure, context: &RequestContext) -> ErrorResponse {
        let message = self
            .localizer()
            .resolve_first(&classified.message_keys(), context.language);

        tracing::debug!(
            trace_id = %context.correlation_id,
            kind = %classified.kind(),
            status = classified.status_code(),
            "Rendering error response"
        );

        assemble(classified, message, context, &self.options)
    }

    /// Context for a request using the configured language
    pub fn context(&self, correlation_id: impl Into<String>) -> RequestContext {
        RequestContext::new(correlation_id, self.options.active_language())
    }
}
