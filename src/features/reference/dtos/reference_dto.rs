use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for `GET /api/states`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatesResponse {
    pub success: bool,
    /// Ordered state labels, "no filter" sentinel first
    pub states: Vec<String>,
}

/// Response for `GET /api/subjects`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubjectsResponse {
    pub success: bool,
    /// Ordered subject labels, "no filter" sentinel first
    pub subjects: Vec<String>,
}
