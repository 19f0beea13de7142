//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::net::TcpListener;

use anyhow::Context;

use api_server::telemetry::{TelemetryConfig, try_init_telemetry};
use api_server::{AppConfig, AppState, startup};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    try_init_telemetry(&TelemetryConfig::from_env()).context("failed to initialise tracing")?;

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config)
        .await
        .context("failed to initialise storage")?;

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;

    startup::run(listener, state, config.workers)?.await?;

    Ok(())
}
