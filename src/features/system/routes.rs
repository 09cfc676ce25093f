use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::centers::services::CatalogService;
use crate::features::system::handlers;

/// Create routes for the system feature (discovery and liveness)
pub fn routes(catalog: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .with_state(catalog)
}
