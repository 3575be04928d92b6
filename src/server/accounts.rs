use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::error::Error;
use crate::server::AppState;
use crate::server::dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::server::response::{ApiError, ApiMessage};
use crate::server::validation;
use crate::types::{Account, Role};

pub async fn register(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (username, password, role) = validation::validate_register(&req)?;

    let role = Role::parse(role).ok_or_else(|| {
        ApiError::bad_request(format!(
            "Invalid role: expected one of {}",
            Role::ALL.map(Role::as_str).join(", ")
        ))
    })?;

    let account = Account {
        username: username.to_string(),
        password_hash: state.hasher.hash(password)?,
        role,
        created_at: Utc::now(),
    };

    match state.store.create_account(&account) {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(ApiMessage::new("Account registered successfully")),
        )),
        Err(Error::AlreadyExists) => Err(ApiError::bad_request("Username already exists")),
        Err(e) => Err(ApiError::from(e)),
    }
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (username, password) = validation::validate_login(&req)?;

    // Unknown usernames and wrong passwords get the same answer.
    let account = state
        .store
        .get_account(username)?
        .ok_or_else(|| ApiError::unauthorized("Invalid username or password"))?;

    if !state.hasher.verify(password, &account.password_hash)? {
        return Err(ApiError::unauthorized("Invalid username or password"));
    }

    let token = state.tokens.issue(&account.username, account.role)?;

    Ok::<_, ApiError>(Json(LoginResponse { token }))
}
