use crate::state::AppState;
use axum::Router;

pub mod handlers;

/// Every application route requires a bearer token.
pub fn router() -> Router<AppState> {
    handlers::routes()
}
