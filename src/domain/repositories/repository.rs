use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
