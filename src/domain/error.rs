//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::item::NodeId;

/// Domain errors represent referential-integrity violations.
/// All are detected before any mutation is applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("item already exists: {0}")]
    DuplicateId(NodeId),

    #[error("parent item not found: {0}")]
    MissingParent(NodeId),

    #[error("item not found: {0}")]
    NotFound(NodeId),

    #[error("cannot set parent of {id} to {parent}: would create a cycle")]
    CycleDetected { id: NodeId, parent: NodeId },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, DomainError>;
