//! Shoplytix server - JSON API backend for the mobile storefront.
//!
//! This binary serves the API the mobile client consumes on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON
//! - In-memory catalog seeded with demo data at startup
//! - Per-session carts held in an in-memory session store
//! - Login proxied to the external auth endpoint

#![cfg_attr(not(test), forbid(unsafe_code))]

use shoplytix_server::catalog::CatalogStore;
use shoplytix_server::config::ServerConfig;
use shoplytix_server::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shoplytix_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Seed the in-memory catalog
    let catalog = CatalogStore::demo();
    tracing::info!(products = catalog.products().len(), "Catalog seeded");

    // Build application state and router
    let state = AppState::new(config.clone(), catalog);
    let app = shoplytix_server::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
