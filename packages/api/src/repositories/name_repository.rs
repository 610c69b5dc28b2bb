use async_trait::async_trait;
use shared::models::name::{Gender, Name};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::repositories::errors::RepositoryError;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait NameRepository: Send + Sync {
    async fn create_name(&self, name: &Name) -> Result<(), RepositoryError>;
    async fn get_name(&self, name_id: &str) -> Result<Name, RepositoryError>;
    /// Names in insertion order, optionally restricted to one gender.
    async fn list_names(&self, gender: Option<Gender>) -> Result<Vec<Name>, RepositoryError>;
    async fn name_exists(&self, value: &str, gender: Gender) -> Result<bool, RepositoryError>;
    async fn delete_name(&self, name_id: &str) -> Result<(), RepositoryError>;
}

#[derive(Clone, Default)]
pub struct InMemoryNameRepository {
    names: Arc<RwLock<Vec<Name>>>,
}

impl InMemoryNameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NameRepository for InMemoryNameRepository {
    async fn create_name(&self, name: &Name) -> Result<(), RepositoryError> {
        let mut names = self.names.write().await;
        if names
            .iter()
            .any(|n| n.id == name.id || (n.value == name.value && n.gender == name.gender))
        {
            return Err(RepositoryError::AlreadyExists);
        }
        names.push(name.clone());
        Ok(())
    }

    async fn get_name(&self, name_id: &str) -> Result<Name, RepositoryError> {
        let names = self.names.read().await;
        names
            .iter()
            .find(|n| n.id == name_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list_names(&self, gender: Option<Gender>) -> Result<Vec<Name>, RepositoryError> {
        let names = self.names.read().await;
        Ok(names
            .iter()
            .filter(|n| gender.map_or(true, |g| n.gender == g))
            .cloned()
            .collect())
    }

    async fn name_exists(&self, value: &str, gender: Gender) -> Result<bool, RepositoryError> {
        let names = self.names.read().await;
        Ok(names.iter().any(|n| n.value == value && n.gender == gender))
    }

    async fn delete_name(&self, name_id: &str) -> Result<(), RepositoryError> {
        let mut names = self.names.write().await;
        let before = names.len();
        names.retain(|n| n.id != name_id);
        if names.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
