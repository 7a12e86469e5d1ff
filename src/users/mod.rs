use crate::state::AppState;
use axum::Router;

pub mod handlers;

/// Account creation and the bounded listing are reachable without a token.
pub fn public_router() -> Router<AppState> {
    handlers::public_routes()
}

/// Per-account routes sit behind the bearer-token middleware.
pub fn protected_router() -> Router<AppState> {
    handlers::protected_routes()
}
