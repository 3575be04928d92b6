use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::ManufacturerRequest;
use crate::server::response::{ApiError, ApiMessage};
use crate::server::validation;

pub async fn list_manufacturers(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let manufacturers = state.store.list_manufacturers()?;

    if manufacturers.is_empty() {
        return Err(ApiError::not_found("No manufacturers found"));
    }

    Ok::<_, ApiError>(Json(manufacturers))
}

pub async fn create_manufacturer(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ManufacturerRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (short_name, full_name, other_details) = validation::validate_manufacturer(&req)?;

    state
        .store
        .create_manufacturer(short_name, full_name, other_details)?;

    Ok::<_, ApiError>((
        StatusCode::CREATED,
        Json(ApiMessage::new("Manufacturer added successfully")),
    ))
}

pub async fn update_manufacturer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Result<Json<ManufacturerRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (short_name, full_name, other_details) = validation::validate_manufacturer(&req)?;

    let updated = state
        .store
        .update_manufacturer(id, short_name, full_name, other_details)?;

    if !updated {
        return Err(ApiError::not_found("Manufacturer not found"));
    }

    Ok::<_, ApiError>(Json(ApiMessage::new("Manufacturer updated successfully")))
}

pub async fn delete_manufacturer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let deleted = state.store.delete_manufacturer(id)?;

    if !deleted {
        return Err(ApiError::not_found("Manufacturer not found"));
    }

    Ok::<_, ApiError>(Json(ApiMessage::new("Manufacturer deleted successfully")))
}
