use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::centers::models::Center;
use crate::shared::constants::{DEFAULT_GRADE, DEFAULT_OPERATING_HOURS};

/// Request DTO for creating a tuition center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCenterDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// Primary subject label; also becomes the single secondary subject tag
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,

    /// Grade range, free form
    #[serde(default = "default_grade")]
    pub grade: String,

    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,

    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,

    #[validate(length(min = 1, message = "state must not be empty"))]
    pub state: String,

    /// Display price; must start with "RM" (checked by the catalog on create)
    #[validate(length(min = 1, message = "price must not be empty"))]
    pub price: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default = "default_operating_hours")]
    pub operating_hours: String,
}

fn default_grade() -> String {
    DEFAULT_GRADE.to_string()
}

fn default_operating_hours() -> String {
    DEFAULT_OPERATING_HOURS.to_string()
}

/// Query params for `/api/search`
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring match over name, subject, description, city
    #[serde(default)]
    pub keyword: String,

    /// Case-insensitive substring match on the primary subject
    #[serde(default)]
    pub subject: String,

    /// Exact, case-sensitive state match
    #[serde(default)]
    pub state: String,

    /// Case-insensitive substring match on the city
    #[serde(default)]
    pub city: String,

    /// Keep centers whose extracted numeric price is at most this ceiling.
    /// Absent means no price filter; 0 is honored as a real ceiling.
    pub max_price: Option<i64>,

    /// One of "rating" (default, descending), "price" or "distance"
    /// (ascending); any other value keeps the filter-pipeline order
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

fn default_sort_by() -> String {
    "rating".to_string()
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            subject: String::new(),
            state: String::new(),
            city: String::new(),
            max_price: None,
            sort_by: default_sort_by(),
        }
    }
}

/// Normalized criteria echoed back with search results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchFilters {
    pub keyword: String,
    pub subject: String,
    pub state: String,
    pub city: String,
    pub max_price: Option<i64>,
    pub sort_by: String,
}

/// Response for `GET /api/centers`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CentersListResponse {
    pub success: bool,
    pub message: String,
    pub currency: String,
    pub country: String,
    pub count: usize,
    pub centers: Vec<Center>,
}

/// Response for `GET /api/search`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub message: String,
    pub currency: String,
    pub filters: SearchFilters,
    pub count: usize,
    pub results: Vec<Center>,
}

/// Response for `GET /api/center/{id}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CenterResponse {
    pub success: bool,
    pub center: Center,
}

/// Response for `POST /api/centers`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCenterResponse {
    pub success: bool,
    pub message: String,
    pub center_id: i64,
    pub center: Center,
}
