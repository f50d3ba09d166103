//! Application State

use std::sync::Arc;

use finflex_core::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Pricing tiers served to API clients
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
