use async_trait::async_trait;
use shared::models::user::User;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::repositories::errors::RepositoryError;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: &User) -> Result<(), RepositoryError>;
    async fn get_user_by_id(&self, user_id: &str) -> Result<User, RepositoryError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    async fn list_users(&self) -> Result<Vec<User>, RepositoryError>;
    async fn delete_user(&self, user_id: &str) -> Result<(), RepositoryError>;
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) || users.values().any(|u| u.username == user.username) {
            return Err(RepositoryError::AlreadyExists);
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<User, RepositoryError> {
        let users = self.users.read().await;
        users.get(user_id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        users
            .remove(user_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
