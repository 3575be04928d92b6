//! # Forecourt
//!
//! A car-dealership records API server, usable both as a standalone binary
//! and as a library.
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use forecourt::auth::{PasswordHasher, TokenService};
//! use forecourt::server::{AppState, create_router};
//! use forecourt::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new("./data/forecourt.db").unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState {
//!     store: Arc::new(store),
//!     tokens: TokenService::new(b"signing-secret"),
//!     hasher: PasswordHasher::new(),
//! });
//! let router = create_router(state);
//! // Serve with axum...
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
