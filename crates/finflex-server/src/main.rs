//! FinFlex HTTP Server
//!
//! Axum-based static host for the WASM frontend, plus a health check and
//! a read-only view of the plan catalog.

mod config;
mod handlers;
mod routes;
mod state;

use finflex_core::Catalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!("⚠ No index.html in {}", config.static_dir.display());
        tracing::warn!("  Build the frontend first: trunk build --release (in crates/finflex-web)");
    }

    let catalog = Catalog::finflex();
    tracing::info!("Loaded {} pricing tiers", catalog.len());

    let app = routes::app(AppState::new(catalog), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 FinFlex running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health     - Health check");
    tracing::info!("  GET  /api/plans  - Plan catalog");
    tracing::info!("  GET  /*          - Frontend ({})", config.static_dir.display());
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
