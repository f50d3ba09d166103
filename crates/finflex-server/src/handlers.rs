//! HTTP Handlers

use axum::{Json, extract::State};
use finflex_core::Catalog;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Pricing tiers, as rendered by the pricing section
pub async fn list_plans(State(state): State<AppState>) -> Json<Catalog> {
    tracing::debug!(tiers = state.catalog.len(), "Serving plan catalog");
    Json(Catalog::clone(&state.catalog))
}
