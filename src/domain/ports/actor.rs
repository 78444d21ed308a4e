//! Actor port - interface for task-executing capabilities.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ActorType, BoardTask, CustomActorDefinition};

/// Opaque handle to the document an actor may mutate.
///
/// The core never inspects it; it is forwarded to actors as-is, or omitted
/// when the host has no document open. Hosts downcast to their concrete
/// editor type inside their actor implementations.
pub trait DocumentHandle: Any + Send + Sync {}

/// Trait for actor implementations.
///
/// An actor is the capability that executes one category of task. Concrete
/// task logic (prompting, document mutation, code synthesis) lives in the
/// host application; this crate only dispatches to it.
#[async_trait]
pub trait Actor: Send + Sync {
    /// A short name used in logs.
    fn name(&self) -> &str;

    /// Execute one task to completion and return its result payload.
    ///
    /// Must be safe to invoke with an absent document handle. Failures are
    /// persisted on the task by the scheduler.
    async fn execute_task(
        &self,
        task: &BoardTask,
        document: Option<Arc<dyn DocumentHandle>>,
    ) -> DomainResult<Value>;
}

/// Factory for the statically resolved built-in actor types.
///
/// Actors are constructed per call with task-specific arguments; the factory
/// receives the opaque execution-environment configuration the executor was
/// built with (e.g. external compute endpoint descriptors).
pub trait ActorFactory: Send + Sync {
    /// Construct an actor for a built-in type, or `None` when the type is
    /// not registered.
    fn create(
        &self,
        actor_type: ActorType,
        task: &BoardTask,
        environment: Option<&Value>,
    ) -> Option<Box<dyn Actor>>;

    /// The types this factory can construct.
    fn available_types(&self) -> Vec<ActorType>;
}

/// Host-supplied runner backing user-defined actors.
///
/// The dispatcher wraps a resolved [`CustomActorDefinition`] and this runner
/// into a generic actor; the runner carries the actual execution logic.
#[async_trait]
pub trait CustomActorRunner: Send + Sync {
    async fn run(
        &self,
        definition: &CustomActorDefinition,
        task: &BoardTask,
        document: Option<Arc<dyn DocumentHandle>>,
    ) -> DomainResult<Value>;
}
