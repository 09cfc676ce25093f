use axum::{routing::get, Router};

use crate::features::reference::handlers;

/// Create routes for the reference-data feature
pub fn routes() -> Router {
    Router::new()
        .route("/api/states", get(handlers::list_states))
        .route("/api/subjects", get(handlers::list_subjects))
}
