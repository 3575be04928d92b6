use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::VehicleRequest;
use crate::server::response::{ApiError, ApiMessage};
use crate::server::validation;

pub async fn list_vehicles(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let vehicles = state.store.list_vehicles()?;

    if vehicles.is_empty() {
        return Err(ApiError::not_found("No vehicles found"));
    }

    Ok::<_, ApiError>(Json(vehicles))
}

pub async fn create_vehicle(
    State(state): State<Arc<AppState>>,
    body: Result<Json<VehicleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (manufacturer_id, description, other_details) = validation::validate_vehicle(&req)?;

    state
        .store
        .create_vehicle(manufacturer_id, description, other_details)?;

    Ok::<_, ApiError>((
        StatusCode::CREATED,
        Json(ApiMessage::new("Vehicle added successfully")),
    ))
}

pub async fn update_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Result<Json<VehicleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (manufacturer_id, description, other_details) = validation::validate_vehicle(&req)?;

    let updated = state
        .store
        .update_vehicle(id, manufacturer_id, description, other_details)?;

    if !updated {
        return Err(ApiError::not_found("Vehicle not found"));
    }

    Ok::<_, ApiError>(Json(ApiMessage::new("Vehicle updated successfully")))
}

pub async fn delete_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let deleted = state.store.delete_vehicle(id)?;

    if !deleted {
        return Err(ApiError::not_found("Vehicle not found"));
    }

    Ok::<_, ApiError>(Json(ApiMessage::new("Vehicle deleted successfully")))
}
