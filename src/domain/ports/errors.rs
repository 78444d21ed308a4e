//! Errors surfaced by the store port.

use thiserror::Error;
use uuid::Uuid;

/// Errors a [`BoardStore`](super::BoardStore) implementation may return.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Board not found: {0}")]
    BoardNotFound(Uuid),

    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}
