mod accounts;
mod branches;
pub mod dto;
mod inventory;
mod manufacturers;
pub mod response;
mod router;
pub mod validation;
mod vehicles;

pub use router::{AppState, create_router};
