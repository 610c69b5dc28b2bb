use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::models::user::User;
use tracing::{debug, error};

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/users/{user_id}", get(get_user).delete(delete_user))
}

async fn get_users(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<User>>, ApiError> {
    state.user_service.get_users().await.map(Json).map_err(|e| {
        error!("Failed to list users: {}", e);
        ApiError::from(e)
    })
}

async fn get_user(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    state
        .user_service
        .get_user(&user_id)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

async fn delete_user(
    State(state): State<AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete_user(&user_id).await.map_err(|e| {
        error!("Failed to delete user {}: {}", user_id, e);
        ApiError::from(e)
    })?;
    debug!("User {} deleted by {}", user_id, caller.username);
    Ok(StatusCode::NO_CONTENT)
}
