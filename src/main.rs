use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod data;
mod error;
mod models;
mod routes;

use config::{Config, ConfigError};
use data::Catalog;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind to address: {0}")]
    Bind(std::io::Error),
    #[error("failed to start server: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting football reference api...");

    let config = Config::from_env()?;

    // Built before bind and never mutated afterwards
    let catalog = Arc::new(Catalog::seeded());
    tracing::info!(
        leagues = catalog.leagues().len(),
        teams = catalog.team_count(),
        players = catalog.player_count(),
        positions = catalog.positions().len(),
        "Reference catalog loaded."
    );

    let app = routes::app(catalog);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(StartupError::Bind)?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(StartupError::Serve)
}
