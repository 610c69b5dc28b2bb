use std::sync::Arc;

use shared::models::user::User;
use tracing::info;

use crate::repositories::errors::RepositoryError;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::user_service_errors::UserServiceError;

pub struct UserService {
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        UserService { repository }
    }

    /// All users, ordered by username.
    pub async fn get_users(&self) -> Result<Vec<User>, UserServiceError> {
        let mut users = self
            .repository
            .list_users()
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, UserServiceError> {
        self.repository
            .get_user_by_id(user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), UserServiceError> {
        self.repository
            .delete_user(user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })
    }

    /// Resolves the user behind a trusted username, registering it on first sight.
    pub async fn get_or_create_user(&self, username: &str) -> Result<User, UserServiceError> {
        if username.trim().is_empty() {
            return Err(UserServiceError::ValidationError(
                "Username cannot be empty".to_string(),
            ));
        }

        if let Some(user) = self
            .repository
            .get_user_by_username(username)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?
        {
            return Ok(user);
        }

        let user = User::new(username);
        match self.repository.create_user(&user).await {
            Ok(()) => {
                info!("Registered new user {}", username);
                Ok(user)
            }
            // Lost a race against a concurrent request for the same username.
            Err(RepositoryError::AlreadyExists) => self
                .repository
                .get_user_by_username(username)
                .await
                .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?
                .ok_or(UserServiceError::UserNotFound),
            Err(e) => Err(UserServiceError::RepositoryError(e.to_string())),
        }
    }
}
