pub mod health;
pub mod models;
pub mod pricing_api;

use crate::catalog::CatalogStore;
use std::sync::Arc;

/// Shared state for all API handlers. The catalog is immutable, so a plain
/// `Arc` is all the sharing machinery this needs.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
}
