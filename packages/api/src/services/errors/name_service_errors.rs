use std::fmt;

#[derive(Debug, PartialEq)]
pub enum NameServiceError {
    NameNotFound,
    NameAlreadyExists,
    ValidationError(String),
    RepositoryError(String),
}

impl fmt::Display for NameServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NameServiceError::NameNotFound => write!(f, "Name not found"),
            NameServiceError::NameAlreadyExists => write!(f, "Name already exists"),
            NameServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            NameServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for NameServiceError {}
