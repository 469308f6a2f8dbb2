use crate::shared::store::RepositoryError;
use crate::shared::validation::ValidationError;

/// Error returned by every content use case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Not found")]
    NotFound,

    #[error("Already exists")]
    AlreadyExists,

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage is busy, retry later")]
    Contention,

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<RepositoryError> for ContentError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => ContentError::NotFound,
            RepositoryError::AlreadyExists => ContentError::AlreadyExists,
            RepositoryError::Contention => ContentError::Contention,
            RepositoryError::DatabaseError(msg) => ContentError::Repository(msg),
        }
    }
}
