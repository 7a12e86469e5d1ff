use crate::state::AppState;
use axum::Router;

pub mod claims;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use claims::Claims;
pub use jwt::{JwtKeys, TokenError};
pub use middleware::{require_auth, AuthUser};

pub fn router() -> Router<AppState> {
    handlers::routes()
}
