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
    model::validate::{validate_application, Action},
    model::{ApplicationUpdate, NewApplication},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/applications", post(create_application).get(all_applications))
        .route(
            "/applications/:id",
            get(get_application)
                .put(update_application)
                .delete(delete_application),
        )
}

#[instrument(skip(state, payload))]
async fn create_application(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<NewApplication>,
) -> Result<impl IntoResponse, ApiError> {
    validate_application(&payload, Action::Create)?;

    let application = state.repo.create_application(payload).await?;

    info!(caller = %caller, application_id = %application.id, "application created");
    let location = format!("{}/{}", uri.path(), application.id);
    Ok((
        StatusCode::CREATED,
        [("Location", location)],
        Json(json!({ "application": application })),
    ))
}

#[instrument(skip(state))]
async fn all_applications(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let applications = state.repo.all_applications().await?;

    info!(caller = %caller, count = applications.len(), "applications listed");
    Ok(Json(json!({ "applications": applications })))
}

#[instrument(skip(state))]
async fn get_application(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let application = state.repo.get_application(id).await?;

    info!(caller = %caller, application_id = %application.id, "application retrieved");
    Ok(Json(json!({ "application": application })))
}

#[instrument(skip(state, payload))]
async fn update_application(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ApplicationUpdate>,
) -> Result<Json<Value>, ApiError> {
    let application = state.repo.update_application(payload, id).await?;

    info!(caller = %caller, application_id = %application.id, "application updated");
    Ok(Json(json!({ "application": application })))
}

#[instrument(skip(state))]
async fn delete_application(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state.repo.delete_application(id).await?;

    info!(caller = %caller, application_id = %id, rows, "application deleted");
    Ok((StatusCode::NO_CONTENT, [("Entity", id.to_string())]))
}
