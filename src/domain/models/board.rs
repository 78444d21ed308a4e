//! Board domain model.
//!
//! A board is a named collection of tasks representing one AI-agent working
//! session. Boards are owned by the external store; the executor holds only a
//! board ID and re-fetches state before each decision point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::BoardTask;

/// A named collection of interdependent tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Unique identifier
    pub id: Uuid,
    /// Human-readable title
    pub title: String,
    /// Ordered task list
    pub tasks: Vec<BoardTask>,
    /// When created
    pub created_at: DateTime<Utc>,
    /// When last updated
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Create a new empty board.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            tasks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a task.
    pub fn with_task(mut self, task: BoardTask) -> Self {
        self.tasks.push(task);
        self
    }

    /// Look up a task by ID.
    pub fn task(&self, id: Uuid) -> Option<&BoardTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Mutable task lookup.
    pub fn task_mut(&mut self, id: Uuid) -> Option<&mut BoardTask> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// IDs of all tasks on the board.
    pub fn task_ids(&self) -> Vec<Uuid> {
        self.tasks.iter().map(|t| t.id).collect()
    }

    /// Tasks that have not reached a terminal status.
    pub fn non_terminal_tasks(&self) -> Vec<&BoardTask> {
        self.tasks.iter().filter(|t| !t.is_terminal()).collect()
    }

    /// Whether every task has reached a terminal status.
    pub fn is_drained(&self) -> bool {
        self.tasks.iter().all(BoardTask::is_terminal)
    }

    /// Structural sanity check: a non-empty title and no duplicate task IDs.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("Board title cannot be empty".to_string());
        }
        let mut seen = std::collections::HashSet::new();
        for task in &self.tasks {
            if !seen.insert(task.id) {
                return Err(format!("Duplicate task id on board: {}", task.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ActorType, TaskStatus};

    #[test]
    fn test_board_task_lookup() {
        let board = Board::new("Draft report");
        let task = BoardTask::new(board.id, "Research", "d", ActorType::Researcher);
        let task_id = task.id;
        let board = board.with_task(task);

        assert!(board.task(task_id).is_some());
        assert!(board.task(Uuid::new_v4()).is_none());
        assert_eq!(board.task_ids(), vec![task_id]);
    }

    #[test]
    fn test_board_drained() {
        let board = Board::new("B");
        assert!(board.is_drained());

        let mut task = BoardTask::new(board.id, "T", "d", ActorType::Coder);
        let board_pending = board.clone().with_task(task.clone());
        assert!(!board_pending.is_drained());
        assert_eq!(board_pending.non_terminal_tasks().len(), 1);

        task.transition_to(TaskStatus::Failed).unwrap();
        let board_done = board.with_task(task);
        assert!(board_done.is_drained());
    }

    #[test]
    fn test_board_validate_duplicate_ids() {
        let board = Board::new("B");
        let task = BoardTask::new(board.id, "T", "d", ActorType::Coder);
        let board = board.with_task(task.clone()).with_task(task);
        assert!(board.validate().is_err());
    }
}
