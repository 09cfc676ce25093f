use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::centers::handlers;
use crate::features::centers::services::CatalogService;

/// Create routes for the centers feature
pub fn routes(catalog: Arc<CatalogService>) -> Router {
    Router::new()
        .route(
            "/api/centers",
            get(handlers::list_centers).post(handlers::create_center),
        )
        .route("/api/search", get(handlers::search_centers))
        .route("/api/center/{id}", get(handlers::get_center))
        .with_state(catalog)
}
