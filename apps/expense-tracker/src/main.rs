//! # Quill Expense Tracker
//!
//! Records expenses in memory and serves them as JSON or as an HTML fragment.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use quill_infra::{TelemetryConfig, init_telemetry};

mod config;
mod error;
mod handlers;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env(
        "expense-tracker",
        "info,expense_tracker=debug,quill_core=debug",
    ));

    let config = AppConfig::from_env();
    tracing::info!("Starting expense tracker on {}:{}", config.host, config.port);

    let state = AppState::new();

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
