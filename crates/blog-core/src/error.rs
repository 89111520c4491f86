//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Handlers treat every variant as "the store operation failed"; the split
/// only matters for log levels.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}

impl RepoError {
    /// True for failures caused by the request (unknown id) rather than the store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepoError::NotFound)
    }
}
