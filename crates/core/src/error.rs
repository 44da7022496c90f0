//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// malformed request input, missing records). Storage failures belong to the
/// repository layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value violated a domain rule (empty name, non-positive price, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Request-level input was malformed (e.g. an empty identifier).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
