//! Board store port.
//!
//! The store is the single source of truth for boards and tasks. It is owned
//! by the surrounding application and may be mutated concurrently by UI
//! actions; the executor re-fetches before each decision and persists after
//! each status mutation.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::models::{
    ActorConfig, ActorType, Board, BoardTask, CustomActorDefinition, TaskPriority, TaskStatus,
};
use crate::domain::ports::errors::StoreError;

/// Partial update applied to one task through the store.
///
/// Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub board_id: Option<Uuid>,
    pub status: Option<TaskStatus>,
    pub error: Option<String>,
    pub result: Option<Value>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_id(mut self, board_id: Uuid) -> Self {
        self.board_id = Some(board_id);
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn result(mut self, result: Value) -> Self {
        self.result = Some(result);
        self
    }
}

/// Fields for creating a task through the store.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub actor_type: ActorType,
    pub custom_actor_id: Option<Uuid>,
    pub dependencies: Vec<Uuid>,
    pub priority: TaskPriority,
    pub metadata: HashMap<String, Value>,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        actor_type: ActorType,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            actor_type,
            ..Self::default()
        }
    }

    pub fn with_dependency(mut self, task_id: Uuid) -> Self {
        if !self.dependencies.contains(&task_id) {
            self.dependencies.push(task_id);
        }
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Port for board persistence operations.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Fetch a board with its current task list.
    async fn get_board(&self, id: Uuid) -> Result<Option<Board>, StoreError>;

    /// Apply a partial update to one task.
    async fn update_task(
        &self,
        board_id: Uuid,
        task_id: Uuid,
        patch: TaskPatch,
    ) -> Result<(), StoreError>;

    /// Create a task on a board.
    async fn create_task(&self, board_id: Uuid, draft: TaskDraft) -> Result<BoardTask, StoreError>;

    /// Durability checkpoint: flush in-memory state to the backing medium.
    async fn checkpoint(&self) -> Result<(), StoreError>;

    /// Look up a user-registered actor definition.
    async fn get_custom_actor(
        &self,
        id: Uuid,
    ) -> Result<Option<CustomActorDefinition>, StoreError>;

    /// Per-actor-type configuration, if any has been set.
    async fn get_actor_config(
        &self,
        actor_type: ActorType,
    ) -> Result<Option<ActorConfig>, StoreError>;
}
