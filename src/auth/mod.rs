mod gate;
mod password;
mod policy;
mod token;

pub use gate::{TOKEN_HEADER, authorize, authorize_request};
pub use password::PasswordHasher;
pub use policy::{Access, access_for};
pub use token::{Claims, TokenService};
