//! Hamster Wisdom Server
//!
//! A small HTTP façade over a remote Supabase-style store - validates wisdom
//! submissions, forwards queries to the store's REST interface, and reshapes
//! the responses into typed JSON.

mod config;
mod error;
mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use config::Config;
use services::StoreClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StoreClient>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting Hamster Wisdom Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = Config::from_env();
    info!(
        "Config loaded: bind={}, store={}",
        config.bind_address,
        if config.has_store() {
            "configured"
        } else {
            "missing"
        }
    );

    // One-time schema setup. Failures are logged and never block startup;
    // the handlers only need the REST interface, not the admin connection.
    if config.has_admin_credentials() {
        info!("Running store schema setup...");
        match storage::initialize(&config).await {
            Ok(()) => info!("Store schema ready"),
            Err(e) => warn!("Store setup failed, continuing without it: {}", e),
        }
    } else {
        info!("Store admin credentials not set, skipping schema setup");
    }

    let state = AppState {
        store: Arc::new(StoreClient::new(&config)),
    };

    let app = router(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/wisdom/random", get(handlers::wisdom::random))
        .route("/wisdom/all", get(handlers::wisdom::all))
        .route("/wisdom/submit", post(handlers::wisdom::submit))
        .route("/wisdom/count", get(handlers::wisdom::count))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
