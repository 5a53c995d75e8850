use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid navigation entry: {0}")]
    InvalidNavEntry(String),

    #[error("Duplicate navigation path: {0}")]
    DuplicateNavPath(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
