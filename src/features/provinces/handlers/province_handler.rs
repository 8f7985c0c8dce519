use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::provinces::dtos::{
    CountryProvinceResponseDto, NameQuery, ProvinceResponseDto, SaveProvinceDto,
};
use crate::features::provinces::models::Province;
use crate::features::provinces::services::ProvinceService;

/// Get a province by id
#[utoipa::path(
    get,
    path = "/api/province/{id}",
    params(
        ("id" = i64, Path, description = "Province id")
    ),
    responses(
        (status = 200, description = "Province details", body = ProvinceResponseDto),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Province not found")
    ),
    tag = "provinces"
)]
pub async fn get_province_by_id(
    State(service): State<Arc<ProvinceService>>,
    Path(id): Path<i64>,
) -> Result<Json<ProvinceResponseDto>> {
    let province = service
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Province with id {} not found", id)))?;

    Ok(Json(province.into()))
}

/// Search provinces by exact name (case-insensitive)
#[utoipa::path(
    get,
    path = "/api/province",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching provinces", body = Vec<ProvinceResponseDto>),
        (status = 400, description = "Name missing or shorter than 3 characters"),
        (status = 404, description = "No match; the body carries the empty list")
    ),
    tag = "provinces"
)]
pub async fn search_provinces_by_name(
    State(service): State<Arc<ProvinceService>>,
    Query(query): Query<NameQuery>,
) -> Result<(StatusCode, Json<Vec<ProvinceResponseDto>>)> {
    let provinces = service.find_by_exact_name(query.name.as_deref()).await?;
    let dtos: Vec<ProvinceResponseDto> = provinces.into_iter().map(Into::into).collect();

    // An empty match answers 404, unlike /all which always answers 200.
    let status = if dtos.is_empty() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    Ok((status, Json(dtos)))
}

/// List the provinces of a country by the country's full name
#[utoipa::path(
    get,
    path = "/api/province/country",
    params(NameQuery),
    responses(
        (status = 200, description = "Provinces of the country", body = Vec<CountryProvinceResponseDto>),
        (status = 400, description = "Name missing or shorter than 3 characters"),
        (status = 404, description = "No match; the body carries the empty list")
    ),
    tag = "provinces"
)]
pub async fn search_provinces_by_country(
    State(service): State<Arc<ProvinceService>>,
    Query(query): Query<NameQuery>,
) -> Result<(StatusCode, Json<Vec<CountryProvinceResponseDto>>)> {
    let provinces = service.find_by_country_name(query.name.as_deref()).await?;
    let dtos: Vec<CountryProvinceResponseDto> = provinces.into_iter().map(Into::into).collect();

    let status = if dtos.is_empty() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    Ok((status, Json(dtos)))
}

/// Create a province
#[utoipa::path(
    post,
    path = "/api/province/save",
    request_body = SaveProvinceDto,
    responses(
        (status = 201, description = "Province created", body = Province),
        (status = 400, description = "Validation error")
    ),
    tag = "provinces"
)]
pub async fn save_province(
    State(service): State<Arc<ProvinceService>>,
    AppJson(payload): AppJson<SaveProvinceDto>,
) -> Result<(StatusCode, Json<Province>)> {
    let saved = service.save(payload.into_province()).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Update an existing province's name
#[utoipa::path(
    put,
    path = "/api/province",
    request_body = SaveProvinceDto,
    responses(
        (status = 200, description = "Province updated", body = Province),
        (status = 400, description = "Missing id or validation error"),
        (status = 404, description = "Province not found")
    ),
    tag = "provinces"
)]
pub async fn update_province(
    State(service): State<Arc<ProvinceService>>,
    AppJson(payload): AppJson<SaveProvinceDto>,
) -> Result<Json<Province>> {
    let id = payload
        .id
        .ok_or_else(|| AppError::BadRequest("an id is required to update a province".to_string()))?;

    let mut existing = service
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Province with id {} not found", id)))?;

    // Only the name is mutable through this endpoint; the country
    // reference stays as persisted.
    existing.name = payload.name.unwrap_or_default();

    let updated = service.update(existing).await?;
    Ok(Json(updated))
}

/// Delete a province by id
#[utoipa::path(
    delete,
    path = "/api/province/{id}",
    params(
        ("id" = i64, Path, description = "Province id")
    ),
    responses(
        (status = 200, description = "Deleted (also when the id did not exist)")
    ),
    tag = "provinces"
)]
pub async fn delete_province(
    State(service): State<Arc<ProvinceService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    service.delete(id).await?;

    Ok(StatusCode::OK)
}

/// List every province
#[utoipa::path(
    get,
    path = "/api/province/all",
    responses(
        (status = 200, description = "All provinces, possibly empty", body = Vec<ProvinceResponseDto>)
    ),
    tag = "provinces"
)]
pub async fn list_all_provinces(
    State(service): State<Arc<ProvinceService>>,
) -> Result<Json<Vec<ProvinceResponseDto>>> {
    let provinces = service.find_all().await?;
    let dtos: Vec<ProvinceResponseDto> = provinces.into_iter().map(Into::into).collect();

    Ok(Json(dtos))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;

    use super::*;
    use crate::features::provinces::routes;
    use crate::shared::test_helpers::{seeded_store, InMemoryProvinceStore};

    fn server_with_seed() -> TestServer {
        server(seeded_store())
    }

    fn server(store: InMemoryProvinceStore) -> TestServer {
        let service = Arc::new(ProvinceService::new(Arc::new(store)));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_get_by_id_projects_detail_dto() {
        let server = server_with_seed();

        let response = server.get("/api/province/2").await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!({"id": 2, "name": "Cordoba", "pais": "Argentina"}));
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_is_404() {
        let server = server_with_seed();

        let response = server.get("/api/province/999").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_by_id_unparseable_is_400() {
        let server = server_with_seed();

        let response = server.get("/api/province/not-a-number").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_by_name_is_case_insensitive() {
        let server = server_with_seed();

        let response = server
            .get("/api/province")
            .add_query_param("name", "CORDOBA")
            .await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!([{"id": 2, "name": "Cordoba", "pais": "Argentina"}]));
    }

    #[tokio::test]
    async fn test_search_by_name_empty_result_is_404_with_empty_list() {
        let server = server_with_seed();

        let response = server
            .get("/api/province")
            .add_query_param("name", "hola")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_search_by_name_too_short_is_400() {
        let server = server_with_seed();

        let response = server
            .get("/api/province")
            .add_query_param("name", "ab")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_by_country_uses_scoped_dto() {
        let server = server_with_seed();

        let response = server
            .get("/api/province/country")
            .add_query_param("name", "Argentina")
            .await;

        response.assert_status(StatusCode::OK);
        // No country echoed back, only id and name.
        response.assert_json(&json!([
            {"id": 1, "name": "Buenos Aires"},
            {"id": 2, "name": "Cordoba"}
        ]));
    }

    #[tokio::test]
    async fn test_search_by_country_empty_result_is_404() {
        let server = server_with_seed();

        let response = server
            .get("/api/province/country")
            .add_query_param("name", "Atlantis")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_save_answers_201_with_generated_id() {
        let server = server_with_seed();

        let response = server
            .post("/api/province/save")
            .json(&json!({"name": "Nueva Provincia", "country": {"id": 1}}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let saved: Province = response.json();
        assert_eq!(saved.id, Some(3));
        assert_eq!(saved.name, "Nueva Provincia");
        assert_eq!(saved.country.name, "Argentina");
    }

    #[tokio::test]
    async fn test_save_ignores_client_supplied_id() {
        let server = server_with_seed();

        let response = server
            .post("/api/province/save")
            .json(&json!({"id": 77, "name": "Chubut", "country": {"id": 1}}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let saved: Province = response.json();
        assert_eq!(saved.id, Some(3));
    }

    #[tokio::test]
    async fn test_save_short_name_is_400() {
        let server = server_with_seed();

        let response = server
            .post("/api/province/save")
            .json(&json!({"name": "ab", "country": {"id": 1}}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_without_id_is_400() {
        let server = server_with_seed();

        let response = server
            .put("/api/province")
            .json(&json!({"id": null, "name": "X"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_404() {
        let server = server_with_seed();

        let response = server
            .put("/api/province")
            .json(&json!({"id": 999, "name": "Santa Fe"}))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_changes_only_the_name() {
        let server = server_with_seed();

        let response = server
            .put("/api/province")
            .json(&json!({"id": 1, "name": "Provincia de Buenos Aires"}))
            .await;

        response.assert_status(StatusCode::OK);
        let updated: Province = response.json();
        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.name, "Provincia de Buenos Aires");
        assert_eq!(updated.country.name, "Argentina");
    }

    #[tokio::test]
    async fn test_update_with_short_name_is_400() {
        let server = server_with_seed();

        let response = server
            .put("/api/province")
            .json(&json!({"id": 1, "name": "ab"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_always_answers_200() {
        let server = server_with_seed();

        server.delete("/api/province/1").await.assert_status_ok();
        // Deleting the same id again stays 200.
        server.delete("/api/province/1").await.assert_status_ok();

        server.get("/api/province/1").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_all_projects_detail_dtos() {
        let server = server_with_seed();

        let response = server.get("/api/province/all").await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!([
            {"id": 1, "name": "Buenos Aires", "pais": "Argentina"},
            {"id": 2, "name": "Cordoba", "pais": "Argentina"}
        ]));
    }

    #[tokio::test]
    async fn test_list_all_empty_is_still_200() {
        let server = server(InMemoryProvinceStore::default());

        let response = server.get("/api/province/all").await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!([]));
    }
}
