use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::services::errors::{
    game_service_errors::GameServiceError, name_service_errors::NameServiceError,
    user_service_errors::UserServiceError,
};

#[derive(Debug)]
pub enum ApiError {
    UserService(UserServiceError),
    NameService(NameServiceError),
    GameService(GameServiceError),
    Unauthorized,
}

impl From<UserServiceError> for ApiError {
    fn from(error: UserServiceError) -> Self {
        ApiError::UserService(error)
    }
}

impl From<NameServiceError> for ApiError {
    fn from(error: NameServiceError) -> Self {
        ApiError::NameService(error)
    }
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

fn not_found(what: &str) -> (StatusCode, Value) {
    (
        StatusCode::NOT_FOUND,
        json!({ "detail": format!("{} not found", what) }),
    )
}

fn already_exists(field: &str, msg: &str) -> (StatusCode, Value) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({
            "detail": [{
                "loc": ["body", field],
                "msg": msg,
                "type": "type_error.already_exists",
            }]
        }),
    )
}

fn bad_request(msg: &str) -> (StatusCode, Value) {
    (StatusCode::BAD_REQUEST, json!({ "detail": msg }))
}

fn internal() -> (StatusCode, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "detail": "internal server error" }),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::UserService(UserServiceError::UserNotFound) => not_found("user"),
            ApiError::UserService(UserServiceError::ValidationError(msg)) => bad_request(&msg),
            ApiError::UserService(UserServiceError::RepositoryError(_)) => internal(),

            ApiError::NameService(NameServiceError::NameNotFound) => not_found("name"),
            ApiError::NameService(NameServiceError::NameAlreadyExists) => {
                already_exists("value", "this name already exists")
            }
            ApiError::NameService(NameServiceError::ValidationError(msg)) => bad_request(&msg),
            ApiError::NameService(NameServiceError::RepositoryError(_)) => internal(),

            ApiError::GameService(GameServiceError::GameNotFound) => not_found("game"),
            ApiError::GameService(GameServiceError::NameNotFound) => not_found("name"),
            ApiError::GameService(GameServiceError::UserNotFound) => not_found("user"),
            ApiError::GameService(GameServiceError::GuestAlreadyExists) => {
                already_exists("user_id", "this guest already exists")
            }
            ApiError::GameService(GameServiceError::ChoiceAlreadyExists) => {
                already_exists("name_id", "this choice already exists")
            }
            ApiError::GameService(GameServiceError::RepositoryError(_)) => internal(),

            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "detail": "Could not validate credentials" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
