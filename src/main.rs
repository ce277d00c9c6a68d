// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::live_map_service::LiveMapService;
use crate::infrastructure::config::load_fleet_config;
use crate::infrastructure::memory_repository::InMemoryRepository;
use crate::infrastructure::seed;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_fleet_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(InMemoryRepository::seeded());

    // Start the map simulation
    let live_map = LiveMapService::new(seed::bus_units());
    let ticker = live_map.spawn_ticker(config.tick_interval());

    // Create services (application layer)
    let state = Arc::new(AppState::new(repository, live_map.clone(), &config));

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting fleet-ops service on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(live_map))
        .await?;

    ticker.abort();
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal(live_map: LiveMapService) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
    // End open map streams so their connections can drain
    live_map.stop();
}
