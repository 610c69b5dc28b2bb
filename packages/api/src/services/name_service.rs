use std::sync::Arc;

use shared::models::name::{Gender, Name, NameCreate};

use crate::repositories::errors::RepositoryError;
use crate::repositories::name_repository::NameRepository;
use crate::services::errors::name_service_errors::NameServiceError;

pub struct NameService {
    repository: Arc<dyn NameRepository + Send + Sync>,
}

impl NameService {
    pub fn new(repository: Arc<dyn NameRepository + Send + Sync>) -> Self {
        NameService { repository }
    }

    /// Names ordered by value, optionally restricted to one gender.
    pub async fn get_names(&self, gender: Option<Gender>) -> Result<Vec<Name>, NameServiceError> {
        let mut names = self
            .repository
            .list_names(gender)
            .await
            .map_err(|e| NameServiceError::RepositoryError(e.to_string()))?;
        names.sort_by(|a, b| a.value.cmp(&b.value));
        Ok(names)
    }

    pub async fn create_name(&self, payload: &NameCreate) -> Result<Name, NameServiceError> {
        let value = payload.value.trim();
        if value.is_empty() {
            return Err(NameServiceError::ValidationError(
                "Name value cannot be empty".to_string(),
            ));
        }

        if self
            .repository
            .name_exists(value, payload.gender)
            .await
            .map_err(|e| NameServiceError::RepositoryError(e.to_string()))?
        {
            return Err(NameServiceError::NameAlreadyExists);
        }

        let name = Name::new(value, payload.gender);
        self.repository
            .create_name(&name)
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists => NameServiceError::NameAlreadyExists,
                _ => NameServiceError::RepositoryError(e.to_string()),
            })?;
        Ok(name)
    }

    pub async fn delete_name(&self, name_id: &str) -> Result<(), NameServiceError> {
        self.repository
            .delete_name(name_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => NameServiceError::NameNotFound,
                _ => NameServiceError::RepositoryError(e.to_string()),
            })
    }
}
