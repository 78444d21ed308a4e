//! Stall governance: bounded recovery when no task is ready.
//!
//! The governor owns the stall-retry budget. Each consultation escalates:
//! break dependency cycles first, then fail tasks with dangling dependency
//! references, and finally fail everything still pending so a run always
//! terminates in finite time, even under adversarial graphs. The wall-clock
//! timeout is armed separately by the executor; the two bounds are
//! independent.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::models::{BoardTask, ExecutorConfig, TaskStatus};
use crate::services::cycle_detector::CycleDetector;
use crate::services::task_graph::TaskGraph;

/// What the scheduler should do about a stalled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StallAction {
    /// Fail each listed task with its circular-dependency reason.
    BreakCycles(Vec<(Uuid, String)>),
    /// Fail each listed task: its dependencies reference IDs absent from
    /// the board.
    FailMissingDependencies(Vec<Uuid>),
    /// Retry budget exhausted; fail every remaining pending task.
    FailAllPending(Vec<Uuid>),
    /// Nothing conclusive yet; sleep and rescan.
    Wait(Duration),
}

/// Bounded stall-recovery policy for one executor instance.
///
/// Counters are private to the executor that owns the governor and must not
/// be shared across boards.
#[derive(Debug)]
pub struct RetryGovernor {
    max_retries: u32,
    stall_delay: Duration,
    attempts: AtomicU32,
    detector: CycleDetector,
}

impl RetryGovernor {
    pub fn new(config: &ExecutorConfig) -> Self {
        Self {
            max_retries: config.max_stall_retries,
            stall_delay: config.stall_delay(),
            attempts: AtomicU32::new(0),
            detector: CycleDetector::new(),
        }
    }

    /// Consecutive stall attempts since the last progress.
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// A non-empty ready set counts as progress and resets the budget.
    pub fn record_progress(&self) {
        self.attempts.store(0, Ordering::SeqCst);
    }

    /// Decide how to recover from a stalled scheduling round.
    pub fn next_action(&self, tasks: &[BoardTask], running: &HashSet<Uuid>) -> StallAction {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;

        let pending: Vec<Uuid> = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending && !running.contains(&t.id))
            .map(|t| t.id)
            .collect();

        tracing::debug!(
            attempt,
            max = self.max_retries,
            pending = pending.len(),
            "stalled scheduling round"
        );

        if attempt > self.max_retries {
            return StallAction::FailAllPending(pending);
        }

        let report = self.detector.analyze(tasks, running);
        if !report.stuck.is_empty() {
            let victims = report
                .stuck
                .iter()
                .map(|&id| {
                    let reason = report
                        .cycle_containing(id)
                        .map(|cycle| DomainError::DependencyCycle(cycle.to_vec()).to_string())
                        .unwrap_or_else(|| "circular dependency detected".to_string());
                    (id, reason)
                })
                .collect();
            return StallAction::BreakCycles(victims);
        }

        // Dangling references are only declared unrecoverable once the cheap
        // retries are spent; a concurrent UI edit may still supply the task.
        if attempt > self.max_retries / 2 {
            let missing = TaskGraph::build(tasks).missing_dependencies(tasks);
            if !missing.is_empty() {
                return StallAction::FailMissingDependencies(
                    missing.into_iter().map(|(id, _)| id).collect(),
                );
            }
        }

        StallAction::Wait(self.stall_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ActorType;

    fn config() -> ExecutorConfig {
        ExecutorConfig {
            max_stall_retries: 4,
            stall_delay_ms: 5,
            ..ExecutorConfig::default()
        }
    }

    fn task(board_id: Uuid) -> BoardTask {
        BoardTask::new(board_id, "T", "d", ActorType::Writer)
    }

    #[test]
    fn test_wait_while_budget_remains() {
        let governor = RetryGovernor::new(&config());
        let board_id = Uuid::new_v4();
        let ghost = Uuid::new_v4();
        let stalled = task(board_id).with_dependency(ghost);
        let tasks = vec![stalled];

        // Attempts 1 and 2 (half the cap) just wait.
        assert_eq!(
            governor.next_action(&tasks, &HashSet::new()),
            StallAction::Wait(Duration::from_millis(5))
        );
        assert_eq!(
            governor.next_action(&tasks, &HashSet::new()),
            StallAction::Wait(Duration::from_millis(5))
        );

        // Attempt 3 exceeds half the cap and scans for dangling references.
        match governor.next_action(&tasks, &HashSet::new()) {
            StallAction::FailMissingDependencies(ids) => assert_eq!(ids.len(), 1),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_cycles_break_before_waiting() {
        let governor = RetryGovernor::new(&config());
        let board_id = Uuid::new_v4();
        let mut a = task(board_id);
        let mut b = task(board_id);
        a.dependencies = vec![b.id];
        b.dependencies = vec![a.id];

        match governor.next_action(&[a.clone(), b.clone()], &HashSet::new()) {
            StallAction::BreakCycles(victims) => {
                assert_eq!(victims.len(), 2);
                assert!(victims
                    .iter()
                    .all(|(_, reason)| reason.starts_with("circular dependency detected")));
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_budget_exhaustion_fails_all_pending() {
        let governor = RetryGovernor::new(&config());
        let board_id = Uuid::new_v4();
        // In-progress dependency that never settles keeps the dependent
        // pending without any cycle or dangling reference.
        let mut dep = task(board_id);
        dep.transition_to(TaskStatus::InProgress).unwrap();
        let waiting = task(board_id).with_dependency(dep.id);
        let tasks = vec![dep, waiting.clone()];

        for _ in 0..4 {
            assert!(matches!(
                governor.next_action(&tasks, &HashSet::new()),
                StallAction::Wait(_)
            ));
        }
        match governor.next_action(&tasks, &HashSet::new()) {
            StallAction::FailAllPending(ids) => assert_eq!(ids, vec![waiting.id]),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_progress_resets_budget() {
        let governor = RetryGovernor::new(&config());
        let tasks = vec![task(Uuid::new_v4()).with_dependency(Uuid::new_v4())];

        governor.next_action(&tasks, &HashSet::new());
        governor.next_action(&tasks, &HashSet::new());
        assert_eq!(governor.attempts(), 2);

        governor.record_progress();
        assert_eq!(governor.attempts(), 0);
    }
}
