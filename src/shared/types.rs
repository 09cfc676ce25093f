use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned on every 4xx/5xx response.
///
/// Success payloads carry endpoint-specific shapes (always with a `count`
/// alongside list data), so this envelope is only built by the error path.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: Option<String>, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            message,
            errors,
        }
    }
}
