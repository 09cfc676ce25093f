use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::centers::dtos::{
    CenterResponse, CentersListResponse, CreateCenterDto, CreateCenterResponse, SearchQuery,
    SearchResponse,
};
use crate::features::centers::services::CatalogService;
use crate::shared::constants::{COUNTRY_LABEL, CURRENCY_LABEL};

/// List all tuition centers in insertion order
#[utoipa::path(
    get,
    path = "/api/centers",
    responses(
        (status = 200, description = "All tuition centers", body = CentersListResponse),
    ),
    tag = "centers"
)]
pub async fn list_centers(
    State(catalog): State<Arc<CatalogService>>,
) -> Json<CentersListResponse> {
    let centers = catalog.list_all().await;

    Json(CentersListResponse {
        success: true,
        message: "Successfully retrieved tuition centers".to_string(),
        currency: CURRENCY_LABEL.to_string(),
        country: COUNTRY_LABEL.to_string(),
        count: centers.len(),
        centers,
    })
}

/// Search tuition centers
///
/// All criteria are optional and AND-combined; the echoed `filters` block
/// carries the normalized (trimmed/lowercased) values actually applied.
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching centers with echoed criteria", body = SearchResponse),
    ),
    tag = "centers"
)]
pub async fn search_centers(
    State(catalog): State<Arc<CatalogService>>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let (results, filters) = catalog.search(query).await;

    Json(SearchResponse {
        success: true,
        message: format!("Found {} centers", results.len()),
        currency: CURRENCY_LABEL.to_string(),
        filters,
        count: results.len(),
        results,
    })
}

/// Get a single tuition center by id
#[utoipa::path(
    get,
    path = "/api/center/{id}",
    params(
        ("id" = i64, Path, description = "Center id")
    ),
    responses(
        (status = 200, description = "Center found", body = CenterResponse),
        (status = 404, description = "Center not found")
    ),
    tag = "centers"
)]
pub async fn get_center(
    State(catalog): State<Arc<CatalogService>>,
    Path(id): Path<i64>,
) -> Result<Json<CenterResponse>> {
    let center = catalog.get_by_id(id).await?;

    Ok(Json(CenterResponse {
        success: true,
        center,
    }))
}

/// Create a new tuition center
///
/// Required fields must be non-empty and the price must start with "RM";
/// rating, distance, subject tags and creation date are synthesized.
#[utoipa::path(
    post,
    path = "/api/centers",
    request_body = CreateCenterDto,
    responses(
        (status = 201, description = "Center created", body = CreateCenterResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "centers"
)]
pub async fn create_center(
    State(catalog): State<Arc<CatalogService>>,
    AppJson(dto): AppJson<CreateCenterDto>,
) -> Result<(StatusCode, Json<CreateCenterResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let center = catalog.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCenterResponse {
            success: true,
            message: "Tuition center created successfully".to_string(),
            center_id: center.id,
            center,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::features::centers::routes;
    use crate::features::centers::services::CatalogService;

    fn test_server() -> TestServer {
        let catalog = Arc::new(CatalogService::new());
        TestServer::new(routes::routes(catalog)).unwrap()
    }

    #[tokio::test]
    async fn test_list_centers_returns_count_and_currency() {
        let server = test_server();
        let response = server.get("/api/centers").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["currency"], json!("RM"));
        assert_eq!(body["count"], json!(4));
        assert_eq!(body["centers"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_get_center_found() {
        let server = test_server();
        let response = server.get("/api/center/2").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["center"]["state"], json!("雪兰莪"));
    }

    #[tokio::test]
    async fn test_get_center_not_found() {
        let server = test_server();
        let response = server.get("/api/center/99").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn test_search_query_params_decode() {
        let server = test_server();
        let response = server
            .get("/api/search")
            .add_query_param("keyword", "数学")
            .add_query_param("max_price", "60")
            .add_query_param("sort_by", "price")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["filters"]["keyword"], json!("数学"));
        assert_eq!(body["filters"]["max_price"], json!(60));
        assert_eq!(body["count"], json!(1));
    }

    #[tokio::test]
    async fn test_search_defaults_to_rating_sort() {
        let server = test_server();
        let response = server.get("/api/search").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["filters"]["sort_by"], json!("rating"));
        assert_eq!(body["results"][0]["id"], json!(3));
    }

    #[tokio::test]
    async fn test_create_center_returns_201_with_assigned_id() {
        let server = test_server();
        let response = server
            .post("/api/centers")
            .json(&json!({
                "name": "新补习中心",
                "subject": "数学",
                "address": "1, Jalan Test",
                "city": "吉隆坡",
                "state": "吉隆坡",
                "price": "RM45/jam"
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["center_id"], json!(5));
        assert_eq!(body["center"]["rating"], json!(4.0));
        assert_eq!(body["center"]["grade"], json!("Tingkatan 1-5"));
        assert_eq!(body["center"]["added_by_user"], json!(true));
    }

    #[tokio::test]
    async fn test_create_center_rejects_bad_price_prefix() {
        let server = test_server();
        let response = server
            .post("/api/centers")
            .json(&json!({
                "name": "新补习中心",
                "subject": "数学",
                "address": "1, Jalan Test",
                "city": "吉隆坡",
                "state": "吉隆坡",
                "price": "45/jam"
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));

        // nothing was appended
        let list: Value = server.get("/api/centers").await.json();
        assert_eq!(list["count"], json!(4));
    }

    #[tokio::test]
    async fn test_create_center_rejects_empty_required_field() {
        let server = test_server();
        let response = server
            .post("/api/centers")
            .json(&json!({
                "name": "",
                "subject": "数学",
                "address": "1, Jalan Test",
                "city": "吉隆坡",
                "state": "吉隆坡",
                "price": "RM45/jam"
            }))
            .await;

        response.assert_status_bad_request();
    }
}
