//! In-memory board store.
//!
//! A complete [`BoardStore`] over process memory: the backing store for the
//! test suites and for hosts that keep boards in memory and persist
//! elsewhere. Checkpoints are counted but otherwise a no-op.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::models::{
    ActorConfig, ActorType, Board, BoardTask, CustomActorDefinition, TaskStatus,
};
use crate::domain::ports::{BoardStore, StoreError, TaskDraft, TaskPatch};

/// Board store backed by in-process memory.
#[derive(Default)]
pub struct InMemoryBoardStore {
    boards: RwLock<HashMap<Uuid, Board>>,
    custom_actors: RwLock<HashMap<Uuid, CustomActorDefinition>>,
    actor_configs: RwLock<HashMap<ActorType, ActorConfig>>,
    checkpoints: AtomicU64,
}

impl InMemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a board.
    pub async fn insert_board(&self, board: Board) {
        self.boards.write().await.insert(board.id, board);
    }

    /// Register a user-defined actor.
    pub async fn register_custom_actor(&self, definition: CustomActorDefinition) {
        self.custom_actors
            .write()
            .await
            .insert(definition.id, definition);
    }

    /// Set per-type actor configuration.
    pub async fn set_actor_config(&self, actor_type: ActorType, config: ActorConfig) {
        self.actor_configs.write().await.insert(actor_type, config);
    }

    /// How many durability checkpoints have been requested.
    pub fn checkpoint_count(&self) -> u64 {
        self.checkpoints.load(Ordering::SeqCst)
    }

    /// Fetch one task. Test convenience.
    pub async fn task(&self, board_id: Uuid, task_id: Uuid) -> Option<BoardTask> {
        self.boards
            .read()
            .await
            .get(&board_id)
            .and_then(|b| b.task(task_id))
            .cloned()
    }

    /// Deliberately desync a task's `board_id`. Test convenience for the
    /// executor's self-healing path.
    pub async fn corrupt_task_board_id(&self, board_id: Uuid, task_id: Uuid) {
        let mut boards = self.boards.write().await;
        if let Some(task) = boards.get_mut(&board_id).and_then(|b| b.task_mut(task_id)) {
            task.board_id = Uuid::new_v4();
        }
    }
}

#[async_trait]
impl BoardStore for InMemoryBoardStore {
    async fn get_board(&self, id: Uuid) -> Result<Option<Board>, StoreError> {
        Ok(self.boards.read().await.get(&id).cloned())
    }

    async fn update_task(
        &self,
        board_id: Uuid,
        task_id: Uuid,
        patch: TaskPatch,
    ) -> Result<(), StoreError> {
        let mut boards = self.boards.write().await;
        let board = boards
            .get_mut(&board_id)
            .ok_or(StoreError::BoardNotFound(board_id))?;
        let task = board
            .task_mut(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;

        if let Some(new_board_id) = patch.board_id {
            task.board_id = new_board_id;
        }
        if let Some(status) = patch.status {
            // Terminal statuses are permanent: an invalid transition is
            // dropped rather than applied.
            if let Err(reason) = task.transition_to(status) {
                tracing::warn!(task_id = %task_id, %reason, "ignoring status update");
            }
        }
        if let Some(error) = patch.error {
            if task.status == TaskStatus::Failed {
                task.error = Some(error);
            }
        }
        if let Some(result) = patch.result {
            task.result = Some(result);
        }
        task.updated_at = Utc::now();
        board.updated_at = Utc::now();
        Ok(())
    }

    async fn create_task(&self, board_id: Uuid, draft: TaskDraft) -> Result<BoardTask, StoreError> {
        let mut boards = self.boards.write().await;
        let board = boards
            .get_mut(&board_id)
            .ok_or(StoreError::BoardNotFound(board_id))?;

        let mut task = BoardTask::new(board_id, draft.title, draft.description, draft.actor_type)
            .with_priority(draft.priority);
        task.custom_actor_id = draft.custom_actor_id;
        task.dependencies = draft.dependencies;
        task.metadata = draft.metadata;

        board.tasks.push(task.clone());
        board.updated_at = Utc::now();
        Ok(task)
    }

    async fn checkpoint(&self) -> Result<(), StoreError> {
        self.checkpoints.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get_custom_actor(
        &self,
        id: Uuid,
    ) -> Result<Option<CustomActorDefinition>, StoreError> {
        Ok(self.custom_actors.read().await.get(&id).cloned())
    }

    async fn get_actor_config(
        &self,
        actor_type: ActorType,
    ) -> Result<Option<ActorConfig>, StoreError> {
        Ok(self.actor_configs.read().await.get(&actor_type).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_task_applies_patch() {
        let store = InMemoryBoardStore::new();
        let board = Board::new("B");
        let board_id = board.id;
        store.insert_board(board).await;

        let task = store
            .create_task(board_id, TaskDraft::new("T", "d", ActorType::Coder))
            .await
            .unwrap();

        store
            .update_task(
                board_id,
                task.id,
                TaskPatch::new().status(TaskStatus::InProgress),
            )
            .await
            .unwrap();
        store
            .update_task(
                board_id,
                task.id,
                TaskPatch::new()
                    .status(TaskStatus::Completed)
                    .result(json!({"ok": true})),
            )
            .await
            .unwrap();

        let stored = store.task(board_id, task.id).await.unwrap();
        assert_eq!(stored.status, TaskStatus::Completed);
        assert_eq!(stored.result, Some(json!({"ok": true})));
        assert!(stored.error.is_none());
    }

    #[tokio::test]
    async fn test_terminal_status_is_permanent() {
        let store = InMemoryBoardStore::new();
        let board = Board::new("B");
        let board_id = board.id;
        store.insert_board(board).await;

        let task = store
            .create_task(board_id, TaskDraft::new("T", "d", ActorType::Coder))
            .await
            .unwrap();
        store
            .update_task(
                board_id,
                task.id,
                TaskPatch::new().status(TaskStatus::Failed).error("boom"),
            )
            .await
            .unwrap();

        // A later completion attempt is dropped.
        store
            .update_task(
                board_id,
                task.id,
                TaskPatch::new().status(TaskStatus::Completed),
            )
            .await
            .unwrap();

        let stored = store.task(board_id, task.id).await.unwrap();
        assert_eq!(stored.status, TaskStatus::Failed);
        assert_eq!(stored.error.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn test_unknown_board_and_task() {
        let store = InMemoryBoardStore::new();
        assert!(store.get_board(Uuid::new_v4()).await.unwrap().is_none());

        let err = store
            .update_task(Uuid::new_v4(), Uuid::new_v4(), TaskPatch::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::BoardNotFound(_)));

        let board = Board::new("B");
        let board_id = board.id;
        store.insert_board(board).await;
        let err = store
            .update_task(board_id, Uuid::new_v4(), TaskPatch::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound(_)));
    }

    #[tokio::test]
    async fn test_checkpoint_counter() {
        let store = InMemoryBoardStore::new();
        assert_eq!(store.checkpoint_count(), 0);
        store.checkpoint().await.unwrap();
        store.checkpoint().await.unwrap();
        assert_eq!(store.checkpoint_count(), 2);
    }
}
