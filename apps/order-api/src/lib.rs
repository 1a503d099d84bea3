//! # Order API
//!
//! HTTP front end for device configuration orders.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Order API Server                               │
//! │                                                                         │
//! │  Client ───► axum (TraceLayer, body limit) ───► POST /orders            │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                    AppState { OrderDesk }               │
//! │                                      ├── OrderValidator(Arc<Catalog>)  │
//! │                                      └── OrderIdGenerator               │
//! │                                            ├── SystemClock              │
//! │                                            └── ThreadRandom             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Optional `configurator.toml` in the working directory:
//! - `host` - bind address (default: 127.0.0.1)
//! - `port` - HTTP port (default: 5000)
//! - `max_body_bytes` - request body limit (default: 16384)
//! - `[[components]]` - catalog entries (default: built-in reference catalog)
//!
//! Log verbosity follows `RUST_LOG` (default: `info`).

pub mod config;
pub mod error;
pub mod services;
pub mod system;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use configurator_core::OrderDesk;
use tower_http::trace::TraceLayer;

// Re-exports
pub use self::config::{ConfigError, ServerConfig};
pub use self::error::{ApiError, ErrorCode};

/// Shared application state.
pub struct AppState {
    pub desk: OrderDesk,
}

/// Builds the HTTP router.
pub fn router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/orders", post(services::order_service::create_order))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
