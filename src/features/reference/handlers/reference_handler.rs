use axum::Json;

use crate::features::reference::dtos::{StatesResponse, SubjectsResponse};
use crate::shared::constants::{MALAYSIA_STATES, MALAYSIA_SUBJECTS};

/// List Malaysian states
///
/// Returned verbatim, sentinel first; the search state filter treats the
/// sentinel as "no filter".
#[utoipa::path(
    get,
    path = "/api/states",
    responses(
        (status = 200, description = "Malaysian state labels", body = StatesResponse),
    ),
    tag = "reference"
)]
pub async fn list_states() -> Json<StatesResponse> {
    Json(StatesResponse {
        success: true,
        states: MALAYSIA_STATES.iter().map(|s| s.to_string()).collect(),
    })
}

/// List Malaysian school subjects
#[utoipa::path(
    get,
    path = "/api/subjects",
    responses(
        (status = 200, description = "Malaysian subject labels", body = SubjectsResponse),
    ),
    tag = "reference"
)]
pub async fn list_subjects() -> Json<SubjectsResponse> {
    Json(SubjectsResponse {
        success: true,
        subjects: MALAYSIA_SUBJECTS.iter().map(|s| s.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::features::reference::routes;
    use crate::shared::constants::{ALL_STATES_SENTINEL, ALL_SUBJECTS_SENTINEL};

    #[tokio::test]
    async fn test_reference_lists_start_with_sentinels() {
        let server = TestServer::new(routes::routes()).unwrap();

        let states: Value = server.get("/api/states").await.json();
        assert_eq!(states["states"][0], ALL_STATES_SENTINEL);
        assert_eq!(states["states"].as_array().unwrap().len(), 15);

        let subjects: Value = server.get("/api/subjects").await.json();
        assert_eq!(subjects["subjects"][0], ALL_SUBJECTS_SENTINEL);
        assert_eq!(subjects["subjects"].as_array().unwrap().len(), 19);
    }
}
