use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use shared::models::name::{Name, NameCreate, NameFilter};
use tracing::{debug, error};

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/names", get(get_names).post(create_name))
        .route("/names/{name_id}", delete(delete_name))
}

async fn get_names(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(filter): Query<NameFilter>,
) -> Result<Json<Vec<Name>>, ApiError> {
    state
        .name_service
        .get_names(filter.gender)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to list names: {}", e);
            ApiError::from(e)
        })
}

async fn create_name(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(payload): Json<NameCreate>,
) -> Result<(StatusCode, Json<Name>), ApiError> {
    let name = state
        .name_service
        .create_name(&payload)
        .await
        .map_err(ApiError::from)?;
    debug!("Name created: {} ({})", name.value, name.gender);
    Ok((StatusCode::CREATED, Json(name)))
}

async fn delete_name(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(name_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .name_service
        .delete_name(&name_id)
        .await
        .map_err(ApiError::from)?;
    Ok(StatusCode::NO_CONTENT)
}
