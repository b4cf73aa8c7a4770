//! # Quill Blog API
//!
//! Actix-web server for posts and the users they reference.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use quill_infra::{TelemetryConfig, init_telemetry};

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env(
        "blog-api",
        "info,blog_api=debug,quill_core=debug,quill_infra=debug",
    ));

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill blog API on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
