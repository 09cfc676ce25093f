use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Local;

use crate::features::centers::services::CatalogService;
use crate::features::system::dtos::{EndpointMap, HealthResponse, ServiceInfoResponse};
use crate::shared::constants::{COUNTRY_LABEL, SERVICE_NAME};

/// Service discovery document
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service metadata and endpoint map", body = ServiceInfoResponse),
    ),
    tag = "system"
)]
pub async fn home() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        service: format!("{} API", SERVICE_NAME),
        version: "4.0".to_string(),
        country: COUNTRY_LABEL.to_string(),
        currency: "RM (Malaysian Ringgit)".to_string(),
        status: "running".to_string(),
        timestamp: Local::now().to_rfc3339(),
        endpoints: EndpointMap {
            all_centers: "/api/centers".to_string(),
            search: "/api/search?keyword=数学&state=吉隆坡&max_price=100".to_string(),
            states: "/api/states".to_string(),
            subjects: "/api/subjects".to_string(),
            health: "/health".to_string(),
        },
    })
}

/// Liveness probe with the current record count
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health_check(State(catalog): State<Arc<CatalogService>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Local::now().to_rfc3339(),
        centers_count: catalog.count().await,
    })
}
