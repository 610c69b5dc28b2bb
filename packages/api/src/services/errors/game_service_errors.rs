use std::fmt;

use crate::repositories::errors::RepositoryError;

#[derive(Debug, PartialEq)]
pub enum GameServiceError {
    GameNotFound,
    NameNotFound,
    UserNotFound,
    GuestAlreadyExists,
    ChoiceAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameServiceError::GameNotFound => write!(f, "Game not found"),
            GameServiceError::NameNotFound => write!(f, "Name not found"),
            GameServiceError::UserNotFound => write!(f, "User not found"),
            GameServiceError::GuestAlreadyExists => write!(f, "Guest already exists"),
            GameServiceError::ChoiceAlreadyExists => write!(f, "Choice already exists"),
            GameServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GameServiceError {}

impl From<RepositoryError> for GameServiceError {
    fn from(err: RepositoryError) -> Self {
        GameServiceError::RepositoryError(err.to_string())
    }
}
