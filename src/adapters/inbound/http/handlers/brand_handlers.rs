use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    adapters::inbound::http::{
        dto::{BrandRequestDto, BrandResponseDto, ErrorResponseDto},
        router::AppState,
    },
    domain::{
        errors::{BrandError, ValidationError},
        models::{CreateBrandRequest, UpdateBrandRequest},
        value_objects::BrandId,
    },
};

/// Error half of every brand handler result
pub type ErrorResponse = (StatusCode, Json<ErrorResponseDto>);

fn brand_error(e: BrandError) -> ErrorResponse {
    let status_code = StatusCode::from(e.clone());
    (status_code, Json(ErrorResponseDto::from_brand_error(e)))
}

fn bad_request(message: String) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponseDto::bad_request(&message)),
    )
}

fn parse_id(raw: &str) -> Result<BrandId, ErrorResponse> {
    BrandId::parse(raw).map_err(|e| bad_request(e.to_string()))
}

fn parse_body(
    payload: Result<Json<BrandRequestDto>, JsonRejection>,
) -> Result<BrandRequestDto, ErrorResponse> {
    payload
        .map(|Json(dto)| dto)
        .map_err(|rejection| bad_request(format!("Invalid request body: {}", rejection.body_text())))
}

/// Handle creating a brand
pub async fn create_brand(
    State(app_state): State<AppState>,
    payload: Result<Json<BrandRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<BrandResponseDto>), ErrorResponse> {
    let request: CreateBrandRequest = parse_body(payload)?
        .try_into()
        .map_err(|e: ValidationError| brand_error(e.into()))?;

    let brand = app_state
        .brand_service
        .create_brand(request)
        .await
        .map_err(brand_error)?;

    Ok((StatusCode::CREATED, Json(brand.into())))
}

/// Handle getting a single brand
pub async fn get_brand(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BrandResponseDto>, ErrorResponse> {
    let id = parse_id(&id)?;

    let brand = app_state
        .brand_service
        .get_brand(&id)
        .await
        .map_err(brand_error)?;

    Ok(Json(brand.into()))
}

/// Handle listing all brands
pub async fn list_brands(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<BrandResponseDto>>, ErrorResponse> {
    let brands = app_state
        .brand_service
        .list_brands()
        .await
        .map_err(brand_error)?;

    Ok(Json(brands.into_iter().map(Into::into).collect()))
}

/// Handle replacing a brand's name
pub async fn update_brand(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BrandRequestDto>, JsonRejection>,
) -> Result<Json<BrandResponseDto>, ErrorResponse> {
    let id = parse_id(&id)?;
    let request: UpdateBrandRequest = parse_body(payload)?
        .try_into()
        .map_err(|e: ValidationError| brand_error(e.into()))?;

    let brand = app_state
        .brand_service
        .update_brand(&id, request)
        .await
        .map_err(brand_error)?;

    Ok(Json(brand.into()))
}

/// Handle deleting a brand
pub async fn delete_brand(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let id = parse_id(&id)?;

    app_state
        .brand_service
        .delete_brand(&id)
        .await
        .map_err(brand_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
