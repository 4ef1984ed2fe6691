//! Store error types

use thiserror::Error;

use crate::query::QueryError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by a statement executor backend
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("statement execution failed: {0}")]
pub struct ExecutorError(pub String);

impl ExecutorError {
    /// Wraps a backend failure message
    pub fn backend(message: impl Into<String>) -> Self {
        ExecutorError(message.into())
    }
}

/// Errors surfaced by the store façade
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// Statement construction was rejected
    #[error(transparent)]
    Build(#[from] QueryError),

    /// The executor backend failed
    #[error(transparent)]
    Execution(#[from] ExecutorError),
}
