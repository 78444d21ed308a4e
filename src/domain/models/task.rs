//! Board task domain model.
//!
//! Tasks are discrete units of work assigned to a typed actor. They form a
//! dependency graph within one board and move through a strictly
//! forward-moving status machine.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::actor::ActorType;

/// Status of a task in the execution pipeline.
///
/// Transitions are strictly forward: `Pending -> InProgress -> {Completed |
/// Failed}`. A task never leaves a terminal state for the lifetime of an
/// execution session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is defined but has not been started
    Pending,
    /// Task is currently being executed by an actor
    InProgress,
    /// Task completed successfully
    Completed,
    /// Task failed (actor error, broken dependencies, or governance)
    Failed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "in_progress" | "in-progress" => Some(Self::InProgress),
            "completed" | "complete" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Check if this is an active (non-terminal) state.
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Valid transitions from this status.
    pub fn valid_transitions(&self) -> Vec<TaskStatus> {
        match self {
            // Pending -> Failed covers structural failures (missing or failed
            // dependencies, cycle breaking, governance exhaustion).
            Self::Pending => vec![Self::InProgress, Self::Failed],
            Self::InProgress => vec![Self::Completed, Self::Failed],
            Self::Completed => vec![],
            Self::Failed => vec![],
        }
    }

    pub fn can_transition_to(&self, new_status: Self) -> bool {
        self.valid_transitions().contains(&new_status)
    }
}

/// Priority level for tasks. Within one ready batch, higher priority runs
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low = 1,
    Normal = 2,
    High = 3,
    Critical = 4,
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Normal
    }
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "normal" => Some(Self::Normal),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// A discrete unit of work assigned to a typed actor on one board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardTask {
    /// Unique identifier (unique within the owning board)
    pub id: Uuid,
    /// Owning board. Must equal the board's id; the executor self-heals
    /// mismatches through the store before use.
    pub board_id: Uuid,
    /// Human-readable title
    pub title: String,
    /// Detailed description the actor works from
    pub description: String,
    /// Which actor category executes this task
    pub actor_type: ActorType,
    /// Definition to resolve when `actor_type` is `Custom`
    pub custom_actor_id: Option<Uuid>,
    /// Task IDs that must reach `Completed` before this task may run
    pub dependencies: Vec<Uuid>,
    /// Current status
    pub status: TaskStatus,
    /// Failure reason, populated only when status is `Failed`
    pub error: Option<String>,
    /// Opaque payload produced by the actor, persisted on success
    pub result: Option<Value>,
    /// Priority within a ready batch
    pub priority: TaskPriority,
    /// Actor-specific configuration (e.g. which sub-actors a Composer may
    /// delegate to)
    pub metadata: HashMap<String, Value>,
    /// When created
    pub created_at: DateTime<Utc>,
    /// When last updated
    pub updated_at: DateTime<Utc>,
}

impl BoardTask {
    /// Create a new pending task on the given board.
    pub fn new(
        board_id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        actor_type: ActorType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            title: title.into(),
            description: description.into(),
            actor_type,
            custom_actor_id: None,
            dependencies: Vec::new(),
            status: TaskStatus::default(),
            error: None,
            result: None,
            priority: TaskPriority::default(),
            metadata: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a dependency.
    pub fn with_dependency(mut self, task_id: Uuid) -> Self {
        if !self.dependencies.contains(&task_id) && task_id != self.id {
            self.dependencies.push(task_id);
        }
        self
    }

    /// Set priority.
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the custom actor definition to resolve for a `Custom` task.
    pub fn with_custom_actor(mut self, definition_id: Uuid) -> Self {
        self.custom_actor_id = Some(definition_id);
        self
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Check if can transition to given status.
    pub fn can_transition_to(&self, new_status: TaskStatus) -> bool {
        self.status.can_transition_to(new_status)
    }

    /// Transition to new status.
    pub fn transition_to(&mut self, new_status: TaskStatus) -> Result<(), String> {
        if !self.can_transition_to(new_status) {
            return Err(format!(
                "Cannot transition from {} to {}",
                self.status.as_str(),
                new_status.as_str()
            ));
        }

        self.status = new_status;
        self.updated_at = Utc::now();

        // Error is meaningful only on failed tasks.
        if new_status != TaskStatus::Failed {
            self.error = None;
        }

        Ok(())
    }

    /// Check if task is terminal.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Validate task.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("Task title cannot be empty".to_string());
        }
        if self.dependencies.contains(&self.id) {
            return Err("Task cannot depend on itself".to_string());
        }
        if self.actor_type == ActorType::Custom && self.custom_actor_id.is_none() {
            return Err("Custom task must name a custom actor definition".to_string());
        }
        if self.actor_type != ActorType::Custom && self.custom_actor_id.is_some() {
            return Err("Only custom tasks may name a custom actor definition".to_string());
        }
        Ok(())
    }
}
