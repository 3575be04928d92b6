use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::InventoryRequest;
use crate::server::response::{ApiError, ApiMessage};
use crate::server::validation;

pub async fn list_inventory(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let records = state.store.list_inventory()?;

    if records.is_empty() {
        return Err(ApiError::not_found("No inventory records found"));
    }

    Ok::<_, ApiError>(Json(records))
}

pub async fn create_inventory_record(
    State(state): State<Arc<AppState>>,
    body: Result<Json<InventoryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (branch_location, vehicle_id, count) = validation::validate_inventory(&req)?;

    state
        .store
        .create_inventory_record(branch_location, vehicle_id, count)?;

    Ok::<_, ApiError>((
        StatusCode::CREATED,
        Json(ApiMessage::new("Inventory record added successfully")),
    ))
}

pub async fn update_inventory_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Result<Json<InventoryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (branch_location, vehicle_id, count) = validation::validate_inventory(&req)?;

    let updated = state
        .store
        .update_inventory_record(id, branch_location, vehicle_id, count)?;

    if !updated {
        return Err(ApiError::not_found("Inventory record not found"));
    }

    Ok::<_, ApiError>(Json(ApiMessage::new("Inventory record updated successfully")))
}

pub async fn delete_inventory_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let deleted = state.store.delete_inventory_record(id)?;

    if !deleted {
        return Err(ApiError::not_found("Inventory record not found"));
    }

    Ok::<_, ApiError>(Json(ApiMessage::new("Inventory record deleted successfully")))
}
