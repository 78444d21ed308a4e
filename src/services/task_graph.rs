//! Dependency graph over one board's task list.
//!
//! Builds forward (`task -> its dependency IDs`) and reverse (`task -> IDs
//! that depend on it`) adjacency maps and computes the ready partition the
//! scheduler executes from.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::domain::models::{BoardTask, TaskStatus};

/// Split of the non-terminal, non-running tasks for one scheduling round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadyPartition {
    /// Every dependency exists and is completed; ordered by priority
    /// (highest first), then creation time.
    pub ready: Vec<Uuid>,
    /// At least one dependency has failed; the scheduler fails these rather
    /// than retrying them forever.
    pub blocked: Vec<Uuid>,
}

impl ReadyPartition {
    /// Whether this round has anything actionable.
    pub fn is_empty(&self) -> bool {
        self.ready.is_empty() && self.blocked.is_empty()
    }
}

/// Forward and reverse dependency maps over a task list snapshot.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    forward: HashMap<Uuid, Vec<Uuid>>,
    reverse: HashMap<Uuid, Vec<Uuid>>,
}

impl TaskGraph {
    /// Build both adjacency maps from the current task list.
    pub fn build(tasks: &[BoardTask]) -> Self {
        let mut forward: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        let mut reverse: HashMap<Uuid, Vec<Uuid>> = HashMap::new();

        for task in tasks {
            forward
                .entry(task.id)
                .or_default()
                .extend(task.dependencies.iter().copied());
            reverse.entry(task.id).or_default();
            for &dep_id in &task.dependencies {
                reverse.entry(dep_id).or_default().push(task.id);
            }
        }

        Self { forward, reverse }
    }

    /// Dependency IDs of a task.
    pub fn dependencies_of(&self, id: Uuid) -> &[Uuid] {
        self.forward.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// IDs of tasks that depend on the given task.
    pub fn dependents_of(&self, id: Uuid) -> &[Uuid] {
        self.reverse.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Compute the ready/blocked partition for one scheduling round.
    ///
    /// A task is ready iff its status is not terminal, it is not currently
    /// running, and every dependency exists and is `Completed`. A task with
    /// a failed dependency is blocked. Tasks with unmet (pending, running,
    /// or missing) dependencies are neither; they wait for a later round.
    pub fn ready_partition(
        &self,
        tasks: &[BoardTask],
        running: &HashSet<Uuid>,
    ) -> ReadyPartition {
        let statuses: HashMap<Uuid, TaskStatus> =
            tasks.iter().map(|t| (t.id, t.status)).collect();

        let mut ready: Vec<&BoardTask> = Vec::new();
        let mut blocked: Vec<Uuid> = Vec::new();

        for task in tasks {
            if task.status.is_terminal() || running.contains(&task.id) {
                continue;
            }

            let mut has_failed_dep = false;
            let mut all_completed = true;
            for dep_id in self.dependencies_of(task.id) {
                match statuses.get(dep_id) {
                    Some(TaskStatus::Completed) => {}
                    Some(TaskStatus::Failed) => {
                        has_failed_dep = true;
                        all_completed = false;
                    }
                    _ => all_completed = false,
                }
            }

            if has_failed_dep {
                blocked.push(task.id);
            } else if all_completed {
                ready.push(task);
            }
        }

        ready.sort_by_key(|t| (Reverse(t.priority), t.created_at, t.id));

        ReadyPartition {
            ready: ready.into_iter().map(|t| t.id).collect(),
            blocked,
        }
    }

    /// Tasks whose dependencies reference IDs absent from the board, paired
    /// with the missing IDs.
    pub fn missing_dependencies(&self, tasks: &[BoardTask]) -> Vec<(Uuid, Vec<Uuid>)> {
        let known: HashSet<Uuid> = tasks.iter().map(|t| t.id).collect();

        tasks
            .iter()
            .filter(|t| !t.status.is_terminal())
            .filter_map(|t| {
                let missing: Vec<Uuid> = self
                    .dependencies_of(t.id)
                    .iter()
                    .filter(|dep| !known.contains(dep))
                    .copied()
                    .collect();
                (!missing.is_empty()).then_some((t.id, missing))
            })
            .collect()
    }
}
