use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RepositoryError {
    NotFound,
    AlreadyExists,
    Storage(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RepositoryError::NotFound => write!(f, "Record not found"),
            RepositoryError::AlreadyExists => write!(f, "Record already exists"),
            RepositoryError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}
