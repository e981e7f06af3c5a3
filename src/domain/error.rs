use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Single field-level validation failure, serialized into the
/// `{"errors": [...]}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub msg: String,
}

impl FieldError {
    pub fn new(field: &str, msg: &str) -> Self {
        Self {
            field: field.to_string(),
            msg: msg.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("User already exists")]
    EmailTaken,

    #[error("Password hashing failed")]
    PasswordHash,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Unique-key rejection from storage. Surfaces when two requests race
    /// past the existence check and both reach the insert.
    #[error("Unique constraint violated")]
    Conflict,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
