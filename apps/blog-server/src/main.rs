//! # Blog Server
//!
//! Entry point for the Actix-web HTTP server: a server-rendered CRUD app
//! over blog posts.

use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use middleware::MethodOverride;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    // No store, no server.
    let state = AppState::init(&config).await?;

    tracing::info!(
        "Starting blog server on {}:{}",
        config.host,
        config.port
    );

    let public_dir = config.public_dir.clone();

    // MethodOverride is registered last so it wraps everything and rewrites
    // the method before the logger and the router see the request.
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(MethodOverride)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
            .service(Files::new("/", public_dir.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
