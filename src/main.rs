//! Main entry point for the FarmLease backend.
//!
//! Initializes tracing, loads configuration from the environment, opens the
//! SQLite pool and serves the API router until shutdown.

mod api;
mod app_state;
mod config;
mod core;
mod domain;
mod errors;
mod routes;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    std::fs::create_dir_all(&config.log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "farmlease.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    let pool = crate::core::persistence::db::connect(&config.database_url).await?;
    let state = app_state::build_app_state(pool, &config)?;
    let app = routes::app_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
