//! Service-layer error types.

use crate::storage::StorageError;
use thiserror::Error;

/// Result alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised by the domain services.
///
/// Services raise `Validation` themselves before touching storage; storage
/// failures pass through untouched inside `Storage`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Required input missing or out of range
    #[error("Validation error: {0}")]
    Validation(String),
    /// Propagated storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Coarse classification used by callers that map errors to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) => ErrorKind::Validation,
            ServiceError::Storage(StorageError::NotFound { .. }) => ErrorKind::NotFound,
            ServiceError::Storage(StorageError::AlreadyExists { .. }) => ErrorKind::Conflict,
            ServiceError::Storage(StorageError::Other(_)) => ErrorKind::Internal,
        }
    }
}

/// Reject an empty required field. Whitespace counts as content.
pub(crate) fn require(value: &str, field: &str) -> ServiceResult<()> {
    if value.is_empty() {
        return Err(ServiceError::validation(format!("{} is required", field)));
    }
    Ok(())
}
