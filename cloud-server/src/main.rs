//! Insider Threat Detection - Web Server
//!
//! Serves detection findings over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 INSIDER THREAT SERVER                    │
//! ├──────────────────────────────────────────────────────────┤
//! │  GET /          GET /threats          GET /health        │
//! │     │               │                                    │
//! │     └───────┬───────┘                                    │
//! │             ▼  (per request, blocking thread)            │
//! │   load_bundle(DATA_DIR) ──► detect() ──► findings        │
//! │             ▲                                            │
//! │   logon.csv  device.csv  file.csv  email.csv             │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod handlers;
mod error;
mod views;

use axum::{
    Router,
    routing::get,
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;

pub use error::AppResult;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging (also captures `log` records from the core crate)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "insider_threat_server=debug,insider_threat_core=info,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Insider Threat Server starting...");
    tracing::info!("Data directory: {}", config.data_dir.display());

    // Build application state
    let state = AppState {
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state.
/// Holds configuration only; datasets are never shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::threats::index))
        .route("/threats", get(handlers::threats::list))
        .route("/health", get(handlers::health::check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
