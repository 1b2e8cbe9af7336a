//! Error handling middleware
//!
//! Every failure leaving a handler, an extractor or the router passes through
//! here and is rendered into an `ErrorResponse` for the request's context.

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::{
        header::{HeaderMap, HeaderName, HeaderValue},
        StatusCode,
    },
    Error, HttpMessage, HttpRequest, HttpResponse,
};
use fm_core::{
    AppError, ErrorKind, ExceptionLogger, ExceptionNotifier, FaultEngine, RequestContext, TracingExceptionLogger,
};
use fm_shared::Language;
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use uuid::Uuid;

use super::REQUEST_ID_HEADER;
use crate::handlers::ApiError;
use crate::i18n::resolve_language;

/// Middleware rendering failures through a [`FaultEngine`]
#[derive(Clone)]
pub struct ErrorHandlerMiddleware {
    engine: FaultEngine,
    logger: Arc<dyn ExceptionLogger>,
    notifier: Option<Arc<dyn ExceptionNotifier>>,
}

impl ErrorHandlerMiddleware {
    /// Logs through `tracing`, no notifier
    pub fn new(engine: FaultEngine) -> Self {
        Self {
            engine,
            logger: Arc::new(TracingExceptionLogger),
            notifier: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ExceptionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn ExceptionNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddlewareService {
            service: Rc::new(service),
            handling: Rc::new(self.clone()),
        }))
    }
}

pub struct ErrorHandlerMiddlewareService<S> {
    service: Rc<S>,
    handling: Rc<ErrorHandlerMiddleware>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let handling = Rc::clone(&self.handling);

        let context = handling.request_context(&req);
        req.extensions_mut().insert(context.clone());

        // The request must stay uniquely owned until routing has matched it
        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    let mut response = match res.response().error() {
                        None => res.map_into_left_body(),
                        Some(error) => {
                            let rendered = handling.render(error, &context).await;
                            res.into_response(rendered).map_into_right_body()
                        }
                    };
                    echo_request_id(response.headers_mut(), &context.correlation_id);
                    Ok(response)
                }
                Err(error) => {
                    let mut rendered = handling.render(&error, &context).await;
                    echo_request_id(rendered.headers_mut(), &context.correlation_id);
                    Err(InternalError::from_response(error.to_string(), rendered).into())
                }
            }
        })
    }
}

impl ErrorHandlerMiddleware {
    fn request_context(&self, req: &ServiceRequest) -> RequestContext {
        let correlation_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        RequestContext::new(correlation_id, resolve_language(req.headers(), self.engine.options()))
    }

    async fn render(&self, error: &Error, context: &RequestContext) -> HttpResponse {
        match error.as_error::<ApiError>() {
            Some(api_error) => self.render_failure(api_error.failure(), context).await,
            None => {
                // Raised by the framework itself: routing, extractors, payload limits
                let status = error.as_response_error().status_code();
                let kind = ErrorKind::from_status(status.as_u16()).unwrap_or(ErrorKind::Unhandled);
                let failure = anyhow::Error::new(AppError::new(kind).with_message(error.to_string()));
                self.render_failure(&failure, context).await
            }
        }
    }

    async fn render_failure(&self, failure: &anyhow::Error, context: &RequestContext) -> HttpResponse {
        if self.engine.options().log_exceptions() {
            self.logger.log(failure, &context.correlation_id);
        }

        let response = self.engine.classify_and_render(failure, context);

        if let Some(notifier) = &self.notifier {
            notifier.notify(failure, &response).await;
        }

        let status = StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(response)
    }
}

fn echo_request_id(headers: &mut HeaderMap, correlation_id: &str) {
    match HeaderValue::from_str(correlation_id) {
        Ok(value) => {
            headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
        Err(_) => log::warn!("Correlation id is not a valid header value: {correlation_id:?}"),
    }
}

/// Access to the request context stored by [`ErrorHandlerMiddleware`]
pub trait ErrorHandlingExt {
    fn request_context(&self) -> Option<RequestContext>;

    fn request_id(&self) -> Option<String> {
        self.request_context().map(|ctx| ctx.correlation_id)
    }

    fn language(&self) -> Option<Language> {
        self.request_context().map(|ctx| ctx.language)
    }
}

impl ErrorHandlingExt for ServiceRequest {
    fn request_context(&self) -> Option<RequestContext> {
        self.extensions().get::<RequestContext>().cloned()
    }
}

impl ErrorHandlingExt for HttpRequest {
    fn request_context(&self) -> Option<RequestContext> {
        self.extensions().get::<RequestContext>().cloned()
    }
}
