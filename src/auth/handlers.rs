use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        password::{self, PasswordError},
        JwtKeys,
    },
    error::ApiError,
    model::validate::{validate_user, Action},
    model::NewUser,
    state::AppState,
    storage::{Repository, StoreError},
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Exchanges credentials for a bearer token.
///
/// Unknown email and wrong password collapse into the same error, so the
/// endpoint never confirms whether an account exists. Any other repository
/// failure propagates with its own message.
pub async fn sign_in(
    repo: &dyn Repository,
    keys: &JwtKeys,
    email: &str,
    candidate: &str,
) -> Result<String, ApiError> {
    let user = match repo.get_user_by_email(email).await {
        Ok(user) => user,
        Err(StoreError::UserNotFound) => {
            warn!("login attempt for unknown email");
            return Err(ApiError::InvalidCredentials);
        }
        Err(other) => return Err(other.into()),
    };

    // Every verification failure counts as a failed login, not just the
    // mismatch case.
    match password::verify(&user.password_hash, candidate) {
        Ok(()) => {}
        Err(PasswordError::Mismatch) => {
            warn!(user_id = %user.id, "login with wrong password");
            return Err(ApiError::InvalidCredentials);
        }
        Err(PasswordError::Hash(e)) => return Err(ApiError::Internal(e)),
    }

    Ok(keys.issue(user.id)?)
}

#[instrument(skip(state, payload))]
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<Json<String>, ApiError> {
    validate_user(&payload, Action::Login)?;

    let keys = JwtKeys::from_ref(&state);
    let token = sign_in(state.repo.as_ref(), &keys, &payload.email, &payload.password).await?;

    info!(email = %payload.email, "user logged in");
    Ok(Json(token))
}
