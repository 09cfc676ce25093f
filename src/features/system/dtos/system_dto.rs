use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for `GET /` (service discovery)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoResponse {
    pub service: String,
    pub version: String,
    pub country: String,
    pub currency: String,
    pub status: String,
    pub timestamp: String,
    pub endpoints: EndpointMap,
}

/// Endpoint map advertised by the discovery document
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointMap {
    pub all_centers: String,
    pub search: String,
    pub states: String,
    pub subjects: String,
    pub health: String,
}

/// Response for `GET /health`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub centers_count: usize,
}
