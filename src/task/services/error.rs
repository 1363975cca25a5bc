//! Service-level error type shared by task services.

use crate::task::{domain::TaskDomainError, ports::TaskRepositoryError};
use thiserror::Error;

/// Service-level errors for task operations.
///
/// A missing task is not an error; services report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
