use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    error::ApiError,
    model::validate::{validate_user, Action},
    model::{NewUser, UserUpdate},
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user).get(all_users))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/:id/applications", get(user_applications))
}

#[instrument(skip(state, payload))]
async fn create_user(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<NewUser>,
) -> Result<impl IntoResponse, ApiError> {
    validate_user(&payload, Action::Create)?;

    let user = state.repo.create_user(payload).await?;

    info!(user_id = %user.id, "user created");
    let location = format!("{}/{}", uri.path(), user.id);
    Ok((
        StatusCode::CREATED,
        [("Location", location)],
        Json(json!({ "user": user })),
    ))
}

#[instrument(skip(state))]
async fn all_users(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = state.repo.all_users().await?;

    info!(count = users.len(), "users listed");
    Ok(Json(json!({ "users": users })))
}

#[instrument(skip(state))]
async fn get_user(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let user = state.repo.get_user(id).await?;

    info!(caller = %caller, user_id = %user.id, "user retrieved");
    Ok(Json(json!({ "user": user })))
}

#[instrument(skip(state, payload))]
async fn update_user(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<Value>, ApiError> {
    let user = state.repo.update_user(payload, id).await?;

    info!(caller = %caller, user_id = %user.id, "user updated");
    Ok(Json(json!({ "user": user })))
}

#[instrument(skip(state))]
async fn delete_user(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state.repo.delete_user(id).await?;

    info!(caller = %caller, user_id = %id, rows, "user deleted");
    Ok((StatusCode::NO_CONTENT, [("Entity", id.to_string())]))
}

#[instrument(skip(state))]
async fn user_applications(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let applications = state.repo.all_user_applications(id).await?;

    info!(caller = %caller, user_id = %id, count = applications.len(), "user applications listed");
    Ok(Json(json!({ "applications": applications })))
}
