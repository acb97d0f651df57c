use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.not_found")]
    NotFound,
    #[error("repository.storage_error")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for SessionError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => SessionError::NotFound,
            other => SessionError::Repository(other),
        }
    }
}
