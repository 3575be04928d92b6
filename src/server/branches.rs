use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::{CreateBranchRequest, UpdateBranchRequest};
use crate::server::response::{ApiError, ApiMessage};
use crate::server::validation;
use crate::types::Branch;

pub async fn list_branches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let branches = state.store.list_branches()?;

    if branches.is_empty() {
        return Err(ApiError::not_found("No branches found"));
    }

    Ok::<_, ApiError>(Json(branches))
}

pub async fn create_branch(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateBranchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (location, other_details, manager_code) = validation::validate_create_branch(&req)?;

    let branch = Branch {
        location: location.to_string(),
        other_details: other_details.map(str::to_string),
        manager_code: manager_code.to_string(),
    };
    state.store.create_branch(&branch)?;

    Ok::<_, ApiError>((
        StatusCode::CREATED,
        Json(ApiMessage::new("Branch added successfully")),
    ))
}

pub async fn update_branch(
    State(state): State<Arc<AppState>>,
    Path(location): Path<String>,
    body: Result<Json<UpdateBranchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (other_details, manager_code) = validation::validate_update_branch(&req)?;

    let updated = state
        .store
        .update_branch(&location, other_details, manager_code)?;

    if !updated {
        return Err(ApiError::not_found("Branch not found"));
    }

    Ok::<_, ApiError>(Json(ApiMessage::new("Branch updated successfully")))
}

pub async fn delete_branch(
    State(state): State<Arc<AppState>>,
    Path(location): Path<String>,
) -> impl IntoResponse {
    let deleted = state.store.delete_branch(&location)?;

    if !deleted {
        return Err(ApiError::not_found("Branch not found"));
    }

    Ok::<_, ApiError>(Json(ApiMessage::new("Branch deleted successfully")))
}
