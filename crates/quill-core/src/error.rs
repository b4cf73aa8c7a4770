//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Concurrent modification: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage I/O failed: {0}")]
    Storage(String),

    #[error("Collection could not be (de)serialized: {0}")]
    Serialization(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Stale write for {id}: expected version {expected}, stored version {found}")]
    Stale { id: String, expected: u64, found: u64 },
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => DomainError::Duplicate(msg),
            RepoError::Stale { id, .. } => {
                DomainError::Conflict(format!("record {id} was modified concurrently"))
            }
            RepoError::NotFound => DomainError::Internal("record vanished during write".into()),
            RepoError::Storage(msg) | RepoError::Serialization(msg) => {
                tracing::error!(error = %msg, "Repository failure");
                DomainError::Internal(msg)
            }
        }
    }
}
