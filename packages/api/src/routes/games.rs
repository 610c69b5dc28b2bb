use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use shared::models::game::{Game, GameCreate, GameGuestCreate, GameUpdate};
use shared::models::name::Name;
use shared::models::stage::{FirstStageChoice, FirstStageVote};
use shared::models::user::User;
use tracing::{debug, error};

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(get_games).post(create_game))
        .route("/games/{game_id}", put(update_game).delete(delete_game))
        .route(
            "/games/{game_id}/guests",
            get(get_game_guests).post(add_game_guest),
        )
        .route(
            "/games/{game_id}/guests/{user_id}",
            delete(remove_game_guest),
        )
        .route("/games/{game_id}/stage-1", post(create_first_stage))
        .route("/games/{game_id}/stage-1/next", get(get_first_stage_next))
        .route(
            "/games/{game_id}/stage-1/result",
            get(get_first_stage_result),
        )
}

async fn get_games(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Game>>, ApiError> {
    state
        .game_service
        .get_games(&user)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to list games for {}: {}", user.username, e);
            ApiError::from(e)
        })
}

async fn create_game(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<GameCreate>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let game = state
        .game_service
        .create_game(&payload, &user)
        .await
        .map_err(|e| {
            error!("Failed to create game for {}: {}", user.username, e);
            ApiError::from(e)
        })?;
    Ok((StatusCode::CREATED, Json(game)))
}

async fn update_game(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(game_id): Path<String>,
    Json(payload): Json<GameUpdate>,
) -> Result<Json<Game>, ApiError> {
    state
        .game_service
        .update_game(&game_id, &payload, &user)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

async fn delete_game(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(game_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .game_service
        .delete_game(&game_id, &user)
        .await
        .map_err(ApiError::from)?;
    debug!("Game {} deleted by {}", game_id, user.username);
    Ok(StatusCode::NO_CONTENT)
}

async fn get_game_guests(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    state
        .game_service
        .get_game_guests(&game_id, &user)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

async fn add_game_guest(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(game_id): Path<String>,
    Json(payload): Json<GameGuestCreate>,
) -> Result<Json<Vec<User>>, ApiError> {
    state
        .game_service
        .create_game_guest(&game_id, &payload.user_id, &user)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

async fn remove_game_guest(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path((game_id, guest_id)): Path<(String, String)>,
) -> Result<Json<Vec<User>>, ApiError> {
    state
        .game_service
        .delete_game_guest(&game_id, &guest_id, &user)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

async fn create_first_stage(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(game_id): Path<String>,
    Json(payload): Json<FirstStageVote>,
) -> Result<(StatusCode, Json<FirstStageChoice>), ApiError> {
    let choice = state
        .game_service
        .create_first_stage(&game_id, &payload, &user)
        .await
        .map_err(|e| {
            error!(
                "Failed to record vote of {} on {} in game {}: {}",
                user.username, payload.name_id, game_id, e
            );
            ApiError::from(e)
        })?;
    Ok((StatusCode::CREATED, Json(choice)))
}

/// Responds with JSON `null` once the user has voted on every candidate.
async fn get_first_stage_next(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(game_id): Path<String>,
) -> Result<Json<Option<Name>>, ApiError> {
    state
        .game_service
        .get_first_stage_next(&game_id, &user)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

async fn get_first_stage_result(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<Name>>, ApiError> {
    state
        .game_service
        .get_first_stage_result(&game_id, &user)
        .await
        .map(Json)
        .map_err(ApiError::from)
}
