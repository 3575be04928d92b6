use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::{accounts, branches, inventory, manufacturers, vehicles};
use crate::auth::{self, PasswordHasher, TokenService};
use crate::store::Store;

pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: TokenService,
    pub hasher: PasswordHasher,
}

async fn index() -> &'static str {
    "Welcome to the Car Dealership Database API"
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        // Account routes
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        // Manufacturer routes
        .route("/manufacturers", get(manufacturers::list_manufacturers))
        .route("/manufacturers", post(manufacturers::create_manufacturer))
        .route(
            "/manufacturers/{id}",
            put(manufacturers::update_manufacturer),
        )
        .route(
            "/manufacturers/{id}",
            delete(manufacturers::delete_manufacturer),
        )
        // Branch routes
        .route("/branches", get(branches::list_branches))
        .route("/branches", post(branches::create_branch))
        .route("/branches/{location}", put(branches::update_branch))
        .route("/branches/{location}", delete(branches::delete_branch))
        // Vehicle routes
        .route("/vehicles", get(vehicles::list_vehicles))
        .route("/vehicles", post(vehicles::create_vehicle))
        .route("/vehicles/{id}", put(vehicles::update_vehicle))
        .route("/vehicles/{id}", delete(vehicles::delete_vehicle))
        // Inventory routes
        .route("/inventory", get(inventory::list_inventory))
        .route("/inventory", post(inventory::create_inventory_record))
        .route("/inventory/{id}", put(inventory::update_inventory_record))
        .route(
            "/inventory/{id}",
            delete(inventory::delete_inventory_record),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::authorize,
        ))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
