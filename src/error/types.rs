// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Drama {0} not found")]
    RecordNotFound(Uuid),

    #[error("Metadata provider unavailable: {0}")]
    MetadataUnavailable(String),

    #[error("Storage write failed: {0}")]
    StorageWriteFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Collapse any persistence-layer failure into `StorageWriteFailed`.
    /// Not-found, domain, provider and config errors pass through untouched.
    pub fn into_storage_failure(self) -> Self {
        match self {
            AppError::Database(e) => AppError::StorageWriteFailed(e.to_string()),
            AppError::Pool(e) => AppError::StorageWriteFailed(e),
            AppError::Serialization(e) => AppError::StorageWriteFailed(e.to_string()),
            AppError::Io(e) => AppError::StorageWriteFailed(e.to_string()),
            other => other,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::MetadataUnavailable(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
