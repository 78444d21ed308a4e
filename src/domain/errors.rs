//! Domain errors for the Quillboard orchestration engine.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::ActorType;
use crate::domain::ports::errors::StoreError;

/// Format a cycle path as a human-readable string: `A -> B -> C -> A`.
pub(crate) fn format_cycle_path(path: &[Uuid]) -> String {
    let mut ids: Vec<String> = path.iter().map(Uuid::to_string).collect();
    if let Some(first) = ids.first().cloned() {
        ids.push(first);
    }
    ids.join(" -> ")
}

/// Domain-level errors that can occur while orchestrating a board.
///
/// Failures surfaced through tasks (status + error fields) use descriptive
/// reasons derived from these variants; the public entry point never returns
/// them to the caller.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Board not found: {0}")]
    BoardNotFound(Uuid),

    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("circular dependency detected: {}", format_cycle_path(.0))]
    DependencyCycle(Vec<Uuid>),

    #[error("No actor registered for type: {}", .0.as_str())]
    ActorNotRegistered(ActorType),

    #[error("Custom actor not found: {0}")]
    CustomActorNotFound(Uuid),

    #[error("Actor is disabled: {0}")]
    ActorDisabled(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::StoreError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_path_closes_the_loop() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let message = DomainError::DependencyCycle(vec![a, b]).to_string();
        assert!(message.starts_with("circular dependency detected: "));
        assert!(message.ends_with(&a.to_string()));
        assert_eq!(message.matches(" -> ").count(), 2);
    }

    #[test]
    fn test_store_error_conversion() {
        let err: DomainError = StoreError::Backend("disk full".to_string()).into();
        assert!(matches!(err, DomainError::StoreError(_)));
    }
}
