//! Error type returned by request handlers

use actix_web::body::{BodySize, MessageBody};
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::web::Bytes;
use actix_web::{HttpResponse, ResponseError};
use fm_core::{classify, ClassifiedFailure, FaultEngine, RequestContext};
use fm_shared::HandlingOptions;
use once_cell::sync::Lazy;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::middleware::REQUEST_ID_HEADER;

/// Renders failures when no error-handling middleware wraps the handler
static FALLBACK_ENGINE: Lazy<FaultEngine> = Lazy::new(|| FaultEngine::new(HandlingOptions::production()));

/// Any failure raised by a handler.
///
/// Everything convertible into `anyhow::Error` converts into `ApiError`, so
/// handlers can use `?` on application and library errors alike. The
/// error-handling middleware renders it with the request's context.
pub struct ApiError(anyhow::Error);

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// The underlying failure
    pub fn failure(&self) -> &anyhow::Error {
        &self.0
    }

    pub fn into_inner(self) -> anyhow::Error {
        self.0
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_of(&classify(&*self.0))
    }

    /// The body is rendered on its first poll; a response replaced by the
    /// error-handling middleware is never rendered.
    fn error_response(&self) -> HttpResponse {
        let classified = classify(&*self.0);
        let context = RequestContext::generated(FALLBACK_ENGINE.options().active_language());

        HttpResponse::build(status_of(&classified))
            .insert_header((REQUEST_ID_HEADER, context.correlation_id.clone()))
            .content_type(ContentType::json())
            .body(DeferredBody {
                pending: Some((classified, context)),
            })
    }
}

fn status_of(classified: &ClassifiedFailure) -> StatusCode {
    StatusCode::from_u16(classified.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// JSON body rendered by [`FALLBACK_ENGINE`] when first polled
struct DeferredBody {
    pending: Option<(ClassifiedFailure, RequestContext)>,
}

impl MessageBody for DeferredBody {
    type Error = serde_json::Error;

    fn size(&self) -> BodySize {
        BodySize::Stream
    }

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Result<Bytes, Self::Error>>> {
        let Some((classified, context)) = self.get_mut().pending.take() else {
            return Poll::Ready(None);
        };

        let response = FALLBACK_ENGINE.render(&classified, &context);
        Poll::Ready(Some(serde_json::to_vec(&response).map(Bytes::from)))
    }
}
