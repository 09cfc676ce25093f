use utoipa::{Modify, OpenApi};

use crate::features::centers::{dtos as centers_dtos, handlers as centers_handlers, models};
use crate::features::reference::{dtos as reference_dtos, handlers as reference_handlers};
use crate::features::system::{dtos as system_dtos, handlers as system_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Centers
        centers_handlers::list_centers,
        centers_handlers::search_centers,
        centers_handlers::get_center,
        centers_handlers::create_center,
        // Reference
        reference_handlers::list_states,
        reference_handlers::list_subjects,
        // System
        system_handlers::home,
        system_handlers::health_check,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Centers
            models::Center,
            centers_dtos::CreateCenterDto,
            centers_dtos::SearchFilters,
            centers_dtos::CentersListResponse,
            centers_dtos::SearchResponse,
            centers_dtos::CenterResponse,
            centers_dtos::CreateCenterResponse,
            // Reference
            reference_dtos::StatesResponse,
            reference_dtos::SubjectsResponse,
            // System
            system_dtos::ServiceInfoResponse,
            system_dtos::EndpointMap,
            system_dtos::HealthResponse,
        )
    ),
    tags(
        (name = "centers", description = "Tuition center catalog: list, search, lookup, create"),
        (name = "reference", description = "Static Malaysian state and subject lists"),
        (name = "system", description = "Service discovery and health"),
    ),
    info(
        title = "T4U Malaysia",
        version = "4.0",
        description = "Malaysian tuition center search platform API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
