//! # Order API
//!
//! HTTP server validating and pricing device configuration orders.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order API Server                                │
//! │                                                                         │
//! │  Client ───► HTTP (5000) ───► POST /orders ───► configurator-core      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use configurator_core::{Category, OrderDesk, OrderIdGenerator, OrderValidator};
use order_api::system::{SystemClock, ThreadRandom};
use order_api::{router, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting order API server...");

    // Load configuration
    let config = ServerConfig::load().context("loading configuration")?;
    let catalog = config.catalog().context("building catalog")?;
    info!(
        address = %config.bind_address(),
        max_body_bytes = config.max_body_bytes,
        components = catalog.len(),
        custom_catalog = !config.components.is_empty(),
        "Configuration loaded"
    );

    let uncovered = catalog.uncovered_categories();
    if !uncovered.is_empty() {
        warn!(
            categories = %Category::list(uncovered.iter()),
            "Catalog leaves required categories uncovered; every order will be rejected"
        );
    }

    // Create shared state
    let ids = OrderIdGenerator::new(Arc::new(SystemClock), Arc::new(ThreadRandom));
    let desk = OrderDesk::new(OrderValidator::new(Arc::new(catalog)), ids);
    let state = Arc::new(AppState { desk });

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("binding {}", config.bind_address()))?;
    info!(addr = %listener.local_addr()?, "Starting HTTP server");

    axum::serve(listener, router(state, config.max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(%err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(%err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
