use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use env_logger::WriteStyle;
use log::info;
use std::time::Duration;

use fm_api::config::{self, ErrorConfig};
use fm_api::create_default_app;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    let app_config = config::load().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    // Initialize logger
    let logging = &app_config.logging;
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(logging.level.as_str()))
        .write_style(if logging.colored { WriteStyle::Auto } else { WriteStyle::Never })
        .format_file(logging.source_location)
        .format_line_number(logging.source_location)
        .init();

    info!("Starting FaultMap API Server ({})", app_config.environment);

    let engine = ErrorConfig::from_env(app_config.error_handling.clone())
        .build_engine()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    info!(
        "Error responses: language={}, details={}, stack traces={}",
        engine.options().active_language(),
        engine.options().show_details(),
        engine.options().include_stack_trace()
    );

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let payload_limit = app_config.server.max_payload_size;
    let mut server = HttpServer::new(move || {
        create_default_app(engine.clone()).app_data(web::JsonConfig::default().limit(payload_limit))
    })
    .keep_alive(Duration::from_secs(app_config.server.keep_alive));

    // 0 keeps actix's default of one worker per core
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
