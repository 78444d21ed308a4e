//! Actor dispatch: resolving a task's actor type to an executable capability.
//!
//! Built-in types resolve statically through an [`ActorFactory`]; `Custom`
//! tasks resolve dynamically through the board store's registered
//! definitions, honoring their enable/disable flags.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ActorType, BoardTask, CustomActorDefinition};
use crate::domain::ports::{Actor, ActorFactory, BoardStore, CustomActorRunner, DocumentHandle};

/// Generic actor wrapping a user-registered definition.
///
/// Execution is delegated to the host's [`CustomActorRunner`]; the wrapper
/// only carries the definition alongside the task.
pub struct DefinedActor {
    definition: CustomActorDefinition,
    runner: Arc<dyn CustomActorRunner>,
}

impl DefinedActor {
    pub fn new(definition: CustomActorDefinition, runner: Arc<dyn CustomActorRunner>) -> Self {
        Self { definition, runner }
    }

    /// The wrapped definition.
    pub fn definition(&self) -> &CustomActorDefinition {
        &self.definition
    }
}

#[async_trait]
impl Actor for DefinedActor {
    fn name(&self) -> &str {
        &self.definition.name
    }

    async fn execute_task(
        &self,
        task: &BoardTask,
        document: Option<Arc<dyn DocumentHandle>>,
    ) -> DomainResult<Value> {
        self.runner.run(&self.definition, task, document).await
    }
}

/// Resolves tasks to concrete actors.
pub struct ActorDispatcher<S: BoardStore> {
    store: Arc<S>,
    factory: Arc<dyn ActorFactory>,
    custom_runner: Option<Arc<dyn CustomActorRunner>>,
    environment: Option<Value>,
}

impl<S: BoardStore> ActorDispatcher<S> {
    pub fn new(store: Arc<S>, factory: Arc<dyn ActorFactory>) -> Self {
        Self {
            store,
            factory,
            custom_runner: None,
            environment: None,
        }
    }

    /// Register the runner backing user-defined actors.
    pub fn with_custom_runner(mut self, runner: Arc<dyn CustomActorRunner>) -> Self {
        self.custom_runner = Some(runner);
        self
    }

    /// Attach opaque execution-environment configuration, forwarded to the
    /// factory on every construction.
    pub fn with_environment(mut self, environment: Value) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Resolve the actor for a task.
    ///
    /// Resolution failures carry the reason the scheduler persists on the
    /// task; they never panic or silently fall back.
    pub async fn resolve(&self, task: &BoardTask) -> DomainResult<Box<dyn Actor>> {
        if task.actor_type.is_custom() {
            self.resolve_custom(task).await
        } else {
            self.resolve_builtin(task).await
        }
    }

    async fn resolve_builtin(&self, task: &BoardTask) -> DomainResult<Box<dyn Actor>> {
        if let Some(config) = self.store.get_actor_config(task.actor_type).await? {
            if !config.enabled {
                return Err(DomainError::ActorDisabled(format!(
                    "actor type '{}' is disabled",
                    task.actor_type.as_str()
                )));
            }
        }

        self.factory
            .create(task.actor_type, task, self.environment.as_ref())
            .ok_or(DomainError::ActorNotRegistered(task.actor_type))
    }

    async fn resolve_custom(&self, task: &BoardTask) -> DomainResult<Box<dyn Actor>> {
        let definition_id: Uuid = task.custom_actor_id.ok_or_else(|| {
            DomainError::ValidationFailed(format!(
                "custom task {} does not name an actor definition",
                task.id
            ))
        })?;

        let definition = self
            .store
            .get_custom_actor(definition_id)
            .await?
            .ok_or(DomainError::CustomActorNotFound(definition_id))?;

        if !definition.enabled {
            return Err(DomainError::ActorDisabled(format!(
                "custom actor '{}' is disabled",
                definition.name
            )));
        }

        let runner = self.custom_runner.clone().ok_or_else(|| {
            DomainError::ValidationFailed("no custom actor runner registered".to_string())
        })?;

        Ok(Box::new(DefinedActor::new(definition, runner)))
    }
}
