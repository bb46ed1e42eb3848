//! Hero Server - HTTP surface for superhero name generation
//!
//! Wires [`hero_core::HeroService`] to:
//! - A record store chosen by configuration (SQLite or in-memory)
//! - An axum router exposing generate, list and health endpoints
//! - Structured logging through `tracing`

#![warn(unreachable_pub)]

pub mod api;
pub mod config;
pub mod db;
pub mod telemetry;

pub use api::{build_router, ErrorBody, HealthResponse, SharedService};
pub use config::{ConfigError, DatabaseConfig, LogConfig, ServerConfig};
pub use db::SqliteHeroStore;

use anyhow::Context;
use hero_core::{HeroService, HeroStore, MemoryHeroStore, PersistenceError};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Open the configured record store
///
/// # Errors
/// - `PersistenceError` if the SQLite database cannot be opened
pub async fn open_store(database: &DatabaseConfig) -> Result<Arc<dyn HeroStore>, PersistenceError> {
    match database {
        DatabaseConfig::Memory => {
            tracing::warn!("Using in-memory record store; records are lost on exit");
            Ok(Arc::new(MemoryHeroStore::new()))
        }
        DatabaseConfig::Sqlite(url) => Ok(Arc::new(SqliteHeroStore::connect(url).await?)),
    }
}

/// Build the service for `config` over `store`
#[must_use]
pub fn build_service(config: &ServerConfig, store: Arc<dyn HeroStore>) -> SharedService {
    let service = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "Generator seeded for reproducible names");
            HeroService::with_seed(store, seed)
        }
        None => HeroService::new(store),
    };
    Arc::new(service)
}

/// Run the server until Ctrl-C
///
/// # Errors
/// Fails if the store cannot be opened or the listen address cannot be bound.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let store = open_store(&config.database)
        .await
        .context("failed to open record store")?;
    let app = build_router(build_service(&config, store));

    let listener = bind_listener(&config).await?;
    tracing::info!(address = %listener.local_addr()?, "Superhero name server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind the configured host and port
///
/// The host may be an IP literal or a hostname such as `localhost`.
///
/// # Errors
/// Fails if the host does not resolve or the port is unavailable.
pub async fn bind_listener(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    let (host, port) = config.bind_address();
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(?err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
