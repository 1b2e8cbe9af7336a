//! Application factory

use actix_web::{middleware::Logger, web, App};
use fm_core::FaultEngine;

use crate::middleware::ErrorHandlerMiddleware;
use crate::routes::{demo, health};

/// Create the application with every route behind the error handler
pub fn create_app(
    error_handler: ErrorHandlerMiddleware,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        // Logger is outermost and records the rendered status
        .wrap(error_handler)
        .wrap(Logger::default())
        .route("/health", web::get().to(health::health_check))
        .service(web::scope("/api/v1").service(web::scope("/demo").configure(demo::configure)))
        .default_service(web::route().to(health::not_found))
}

/// Application wired with the default error handler for `engine`
pub fn create_default_app(
    engine: FaultEngine,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    create_app(ErrorHandlerMiddleware::new(engine))
}
