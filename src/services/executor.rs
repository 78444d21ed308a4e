//! Board executor: sequential, dependency-ordered task scheduling.
//!
//! One executor instance is bound to one board. `execute_all_tasks` drains
//! the board: it repeatedly re-fetches state from the store, runs every ready
//! task one at a time, and consults the stall governor when nothing is
//! runnable. Failures are data (task status and error fields), never errors
//! returned to the caller.
//!
//! The source system scheduled through re-entrant recursion; this
//! implementation uses an explicit scheduling loop with the same ceilings
//! and resets, so the stack stays flat while the observable semantics match.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ActorType, Board, BoardTask, ExecutorConfig, TaskStatus};
use crate::domain::ports::{
    ActorFactory, BoardStore, CustomActorRunner, DocumentHandle, TaskDraft, TaskPatch,
};
use crate::services::dispatcher::ActorDispatcher;
use crate::services::governor::{RetryGovernor, StallAction};
use crate::services::task_graph::TaskGraph;

/// Reason written to tasks whose dependencies failed.
pub const REASON_DEPENDENCIES_FAILED: &str = "dependencies failed to complete";
/// Reason written to tasks with dangling dependency references.
pub const REASON_MISSING_DEPENDENCIES: &str = "missing dependencies";
/// Reason written to tasks failed by the wall-clock timeout.
pub const REASON_TIMED_OUT: &str = "execution timed out";
/// Reason written to tasks failed when the stall budget runs out.
pub const REASON_RETRIES_EXHAUSTED: &str = "scheduling retries exhausted";

/// In-flight execution entry: cloneable so a re-entrant call joins the same
/// result instead of invoking the actor twice.
type InFlight = Shared<BoxFuture<'static, Result<Value, String>>>;

/// Outcome of a single `execute_task` call.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    /// The actor finished and its result was persisted.
    Completed(Value),
    /// The task was failed before reaching its actor (broken dependencies).
    Failed(String),
    /// Nothing to do: terminal, unmet dependencies, or disposed executor.
    Skipped,
}

/// Summary returned from [`BoardExecutor::execute_all_tasks`].
///
/// Informational only: callers observe completion through task status in the
/// store, not through this value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionSummary {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub failed_tasks: usize,
    /// Scheduling rounds that executed at least one task.
    pub rounds: u32,
    /// Stall-recovery consultations.
    pub stall_recoveries: u32,
    pub duration_ms: u64,
}

impl ExecutionSummary {
    pub fn success_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        self.completed_tasks as f64 / self.total_tasks as f64
    }
}

/// State shared with the timeout timer and the in-flight task futures.
struct ExecutorShared<S> {
    store: Arc<S>,
    board_id: Uuid,
    disposed: AtomicBool,
    running: Mutex<HashMap<Uuid, InFlight>>,
}

/// Builder for [`BoardExecutor`].
pub struct BoardExecutorBuilder<S: BoardStore + 'static> {
    store: Arc<S>,
    board_id: Uuid,
    factory: Arc<dyn ActorFactory>,
    custom_runner: Option<Arc<dyn CustomActorRunner>>,
    document: Option<Arc<dyn DocumentHandle>>,
    environment: Option<Value>,
    config: ExecutorConfig,
}

impl<S: BoardStore + 'static> BoardExecutorBuilder<S> {
    /// Register the runner backing user-defined actors.
    pub fn with_custom_runner(mut self, runner: Arc<dyn CustomActorRunner>) -> Self {
        self.custom_runner = Some(runner);
        self
    }

    /// Attach the document handle forwarded to actors.
    pub fn with_document(mut self, document: Arc<dyn DocumentHandle>) -> Self {
        self.document = Some(document);
        self
    }

    /// Attach opaque execution-environment configuration.
    pub fn with_environment(mut self, environment: Value) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Override executor bounds.
    pub fn with_config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the executor and arm its wall-clock timeout.
    ///
    /// Must be called within a tokio runtime; the timeout runs as a spawned
    /// task until it fires or the executor is disposed.
    pub fn build(self) -> BoardExecutor<S> {
        let shared = Arc::new(ExecutorShared {
            store: Arc::clone(&self.store),
            board_id: self.board_id,
            disposed: AtomicBool::new(false),
            running: Mutex::new(HashMap::new()),
        });

        let mut dispatcher = ActorDispatcher::new(self.store, self.factory);
        if let Some(runner) = self.custom_runner {
            dispatcher = dispatcher.with_custom_runner(runner);
        }
        if let Some(environment) = self.environment {
            dispatcher = dispatcher.with_environment(environment);
        }

        let governor = RetryGovernor::new(&self.config);
        let timeout_guard = arm_timeout(&shared, self.config.run_timeout());

        BoardExecutor {
            shared,
            dispatcher,
            document: self.document,
            config: self.config,
            governor,
            timeout_guard: std::sync::Mutex::new(Some(timeout_guard)),
        }
    }
}

/// Orchestrates one board's tasks in dependency order.
pub struct BoardExecutor<S: BoardStore + 'static> {
    shared: Arc<ExecutorShared<S>>,
    dispatcher: ActorDispatcher<S>,
    document: Option<Arc<dyn DocumentHandle>>,
    config: ExecutorConfig,
    governor: RetryGovernor,
    timeout_guard: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl<S: BoardStore + 'static> BoardExecutor<S> {
    /// Start building an executor bound to one board.
    pub fn builder(
        store: Arc<S>,
        board_id: Uuid,
        factory: Arc<dyn ActorFactory>,
    ) -> BoardExecutorBuilder<S> {
        BoardExecutorBuilder {
            store,
            board_id,
            factory,
            custom_runner: None,
            document: None,
            environment: None,
            config: ExecutorConfig::default(),
        }
    }

    /// The board this executor is bound to.
    pub fn board_id(&self) -> Uuid {
        self.shared.board_id
    }

    /// Whether the executor has been shut down (explicitly or by timeout).
    pub fn is_disposed(&self) -> bool {
        self.shared.disposed.load(Ordering::SeqCst)
    }

    /// Irreversibly shut down this executor.
    ///
    /// Cooperative and non-preemptive: in-flight actor calls are abandoned,
    /// not cancelled. Their eventual resolutions are ignored and task status
    /// is not updated after disposal.
    pub async fn dispose(&self) {
        if self.shared.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Ok(mut guard) = self.timeout_guard.lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
        self.shared.running.lock().await.clear();
        tracing::info!(board_id = %self.shared.board_id, "executor disposed");
    }

    /// Drain the board: run every task in dependency order until all tasks
    /// are terminal or execution is aborted.
    pub async fn execute_all_tasks(&self) -> ExecutionSummary {
        let started = std::time::Instant::now();
        let mut summary = ExecutionSummary::default();

        if self.is_disposed() {
            tracing::debug!(board_id = %self.shared.board_id, "execute_all_tasks on disposed executor");
            return summary;
        }

        if let Err(err) = self.ensure_baseline_tasks().await {
            tracing::error!(board_id = %self.shared.board_id, %err, "failed to seed baseline tasks");
            return summary;
        }

        // Depth counts progress-driven rounds and resets to zero on every
        // stall recovery, exactly as the source's recursion counter did. Each
        // round re-fetches and re-partitions the whole board: terminal tasks
        // are skipped by the ready computation, so this is equivalent to the
        // source's remaining-subset recursion without hiding completed
        // dependencies from the readiness check.
        let mut depth: u32 = 0;

        loop {
            if self.is_disposed() {
                break;
            }

            depth += 1;
            if depth > self.config.max_recursion_depth {
                tracing::warn!(
                    board_id = %self.shared.board_id,
                    depth,
                    "scheduling depth ceiling reached; stopping run"
                );
                break;
            }

            let board = match self.fetch_board().await {
                Ok(board) => board,
                Err(err) => {
                    tracing::error!(board_id = %self.shared.board_id, %err, "board unavailable");
                    break;
                }
            };
            if let Err(reason) = board.validate() {
                tracing::warn!(board_id = %board.id, %reason, "board failed structural validation");
            }
            // Durability checkpoint before acting, so a crash mid-round
            // leaves consistent on-disk state.
            if let Err(err) = self.shared.store.checkpoint().await {
                tracing::warn!(board_id = %board.id, %err, "durability checkpoint failed");
            }

            let tasks: Vec<BoardTask> = board.tasks.clone();

            let running: HashSet<Uuid> =
                self.shared.running.lock().await.keys().copied().collect();
            let graph = TaskGraph::build(&tasks);
            let partition = graph.ready_partition(&tasks, &running);

            if !partition.is_empty() {
                self.governor.record_progress();
                summary.rounds += 1;

                // A failed dependency settles its dependents in the same
                // round, before any actor runs.
                for &task_id in &partition.blocked {
                    self.fail_task(task_id, REASON_DEPENDENCIES_FAILED).await;
                }

                // Sequential by design: actors may mutate shared document
                // state, so ordering matters more than throughput.
                for &task_id in &partition.ready {
                    if self.is_disposed() {
                        break;
                    }
                    match self.execute_task(task_id).await {
                        Ok(TaskOutcome::Completed(_)) | Ok(TaskOutcome::Skipped) => {}
                        Ok(TaskOutcome::Failed(reason)) => {
                            tracing::warn!(task_id = %task_id, %reason, "task failed before its actor ran");
                        }
                        Err(err) => {
                            // Actor failures are data: the status is already
                            // persisted, so the error stops here.
                            tracing::warn!(task_id = %task_id, %err, "task execution failed");
                        }
                    }
                }

                let board = match self.fetch_board().await {
                    Ok(board) => board,
                    Err(err) => {
                        tracing::error!(board_id = %self.shared.board_id, %err, "board unavailable");
                        break;
                    }
                };
                // Remaining work is recomputed over the refetched board so
                // tasks spawned mid-run (e.g. by a planner) join the next
                // round.
                if board.is_drained() {
                    break;
                }
                continue;
            }

            if tasks.iter().all(BoardTask::is_terminal) {
                break;
            }

            // Nothing ready but work remains. Wait out in-flight executions
            // before consulting the governor.
            let in_flight: Vec<InFlight> = self
                .shared
                .running
                .lock()
                .await
                .values()
                .cloned()
                .collect();
            if !in_flight.is_empty() {
                futures::future::join_all(in_flight).await;
                depth = 0;
                continue;
            }

            summary.stall_recoveries += 1;
            match self.governor.next_action(&tasks, &running) {
                StallAction::BreakCycles(victims) => {
                    for (task_id, reason) in victims {
                        self.fail_task(task_id, &reason).await;
                    }
                }
                StallAction::FailMissingDependencies(task_ids) => {
                    for task_id in task_ids {
                        self.fail_task(task_id, REASON_MISSING_DEPENDENCIES).await;
                    }
                }
                StallAction::FailAllPending(task_ids) => {
                    // The budget is spent; failing the stragglers ends the
                    // run regardless of what else the board still holds.
                    for task_id in task_ids {
                        self.fail_task(task_id, REASON_RETRIES_EXHAUSTED).await;
                    }
                    break;
                }
                StallAction::Wait(delay) => {
                    tokio::time::sleep(delay).await;
                }
            }

            // Stall recovery restarts the scheduling loop from scratch with
            // the depth ceiling reset.
            depth = 0;
        }

        if let Ok(board) = self.fetch_board().await {
            summary.total_tasks = board.tasks.len();
            summary.completed_tasks = board
                .tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count();
            summary.failed_tasks = board
                .tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Failed)
                .count();
        }
        summary.duration_ms = started.elapsed().as_millis() as u64;

        tracing::info!(
            board_id = %self.shared.board_id,
            completed = summary.completed_tasks,
            failed = summary.failed_tasks,
            rounds = summary.rounds,
            "run finished"
        );
        summary
    }

    /// Execute one task to completion.
    ///
    /// Idempotent under re-entry: a task already in the running map yields
    /// the same in-flight result instead of a second actor invocation. The
    /// scheduler calls this for every ready task; hosts may also call it
    /// directly for a single task.
    pub async fn execute_task(&self, task_id: Uuid) -> DomainResult<TaskOutcome> {
        if self.is_disposed() {
            return Ok(TaskOutcome::Skipped);
        }

        if let Some(in_flight) = self.shared.running.lock().await.get(&task_id).cloned() {
            tracing::debug!(task_id = %task_id, "joining in-flight execution");
            return Self::settle(in_flight).await;
        }

        let board = self.fetch_board().await?;
        let mut task = board
            .task(task_id)
            .cloned()
            .ok_or(DomainError::TaskNotFound(task_id))?;

        // Self-heal a board_id mismatch through the store before any other
        // component reads it.
        if task.board_id != board.id {
            tracing::warn!(
                task_id = %task_id,
                stored = %task.board_id,
                board = %board.id,
                "repairing task board_id mismatch"
            );
            self.shared
                .store
                .update_task(board.id, task_id, TaskPatch::new().board_id(board.id))
                .await
                .map_err(DomainError::from)?;
            task.board_id = board.id;
        }

        if task.status.is_terminal() {
            return Ok(TaskOutcome::Skipped);
        }
        if task.status == TaskStatus::InProgress {
            // In progress but not in our running map: another session owns
            // it. Never double-run.
            tracing::warn!(task_id = %task_id, "task already in progress elsewhere; skipping");
            return Ok(TaskOutcome::Skipped);
        }

        // Dependencies must all be completed. A failed dependency fails this
        // task without ever resolving an actor.
        let mut failed_dep = false;
        let mut unmet_dep = false;
        for dep_id in &task.dependencies {
            match board.task(*dep_id).map(|dep| dep.status) {
                Some(TaskStatus::Completed) => {}
                Some(TaskStatus::Failed) => failed_dep = true,
                _ => unmet_dep = true,
            }
        }
        if failed_dep {
            self.fail_task(task_id, REASON_DEPENDENCIES_FAILED).await;
            return Ok(TaskOutcome::Failed(REASON_DEPENDENCIES_FAILED.to_string()));
        }
        if unmet_dep {
            tracing::debug!(task_id = %task_id, "dependencies not yet satisfied; skipping");
            return Ok(TaskOutcome::Skipped);
        }

        self.shared
            .store
            .update_task(
                board.id,
                task_id,
                TaskPatch::new().status(TaskStatus::InProgress),
            )
            .await
            .map_err(DomainError::from)?;

        let actor = match self.dispatcher.resolve(&task).await {
            Ok(actor) => actor,
            Err(err) => {
                let reason = err.to_string();
                self.fail_task(task_id, &reason).await;
                return Err(err);
            }
        };

        tracing::info!(
            task_id = %task_id,
            actor = actor.name(),
            title = %task.title,
            "executing task"
        );

        // The in-flight future persists its own outcome and removes itself
        // from the running map when it settles; re-entrant callers share it.
        let shared = Arc::clone(&self.shared);
        let document = self.document.clone();
        let future: BoxFuture<'static, Result<Value, String>> = async move {
            let result = actor.execute_task(&task, document).await;
            let settled = match result {
                Ok(value) => {
                    if !shared.disposed.load(Ordering::SeqCst) {
                        let patch = TaskPatch::new()
                            .status(TaskStatus::Completed)
                            .result(value.clone());
                        if let Err(err) =
                            shared.store.update_task(shared.board_id, task.id, patch).await
                        {
                            tracing::error!(task_id = %task.id, %err, "failed to persist completion");
                        }
                    }
                    Ok(value)
                }
                Err(err) => {
                    let reason = err.to_string();
                    if !shared.disposed.load(Ordering::SeqCst) {
                        let patch = TaskPatch::new()
                            .status(TaskStatus::Failed)
                            .error(reason.clone());
                        if let Err(err) =
                            shared.store.update_task(shared.board_id, task.id, patch).await
                        {
                            tracing::error!(task_id = %task.id, %err, "failed to persist failure");
                        }
                    }
                    Err(reason)
                }
            };
            // Always leave the running map, whatever the outcome.
            shared.running.lock().await.remove(&task.id);
            settled
        }
        .boxed();

        // Re-check at insert time: a concurrent call may have won the race
        // past the initial lookup. The loser's future is dropped unpolled,
        // so its actor never runs.
        let in_flight: InFlight = {
            let mut running = self.shared.running.lock().await;
            match running.get(&task_id) {
                Some(existing) => existing.clone(),
                None => {
                    let in_flight = future.shared();
                    running.insert(task_id, in_flight.clone());
                    in_flight
                }
            }
        };

        Self::settle(in_flight).await
    }

    /// Await an in-flight execution and translate its settled result.
    async fn settle(in_flight: InFlight) -> DomainResult<TaskOutcome> {
        match in_flight.await {
            Ok(value) => Ok(TaskOutcome::Completed(value)),
            Err(reason) => Err(DomainError::ExecutionFailed(reason)),
        }
    }

    /// Seed the two synthetic baseline tasks on an empty board: a planner,
    /// and a composer depending on it.
    async fn ensure_baseline_tasks(&self) -> DomainResult<()> {
        let board = self.fetch_board().await?;
        if !board.tasks.is_empty() {
            return Ok(());
        }

        tracing::info!(board_id = %board.id, "empty board; seeding baseline planner and composer");
        let planner = self
            .shared
            .store
            .create_task(
                board.id,
                TaskDraft::new(
                    "Plan the board",
                    "Break the board's goal into concrete tasks.",
                    ActorType::Planner,
                ),
            )
            .await
            .map_err(DomainError::from)?;
        self.shared
            .store
            .create_task(
                board.id,
                TaskDraft::new(
                    "Compose the document",
                    "Assemble task results into the final document.",
                    ActorType::Composer,
                )
                .with_dependency(planner.id),
            )
            .await
            .map_err(DomainError::from)?;
        Ok(())
    }

    async fn fetch_board(&self) -> DomainResult<Board> {
        self.shared
            .store
            .get_board(self.shared.board_id)
            .await
            .map_err(DomainError::from)?
            .ok_or(DomainError::BoardNotFound(self.shared.board_id))
    }

    async fn fail_task(&self, task_id: Uuid, reason: &str) {
        tracing::warn!(board_id = %self.shared.board_id, task_id = %task_id, reason, "failing task");
        let patch = TaskPatch::new().status(TaskStatus::Failed).error(reason);
        if let Err(err) = self
            .shared
            .store
            .update_task(self.shared.board_id, task_id, patch)
            .await
        {
            tracing::error!(task_id = %task_id, %err, "failed to persist failure status");
        }
    }
}

impl<S: BoardStore + 'static> Drop for BoardExecutor<S> {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.timeout_guard.lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
    }
}

/// Arm the single wall-clock timer for one executor.
///
/// On fire, every task still non-terminal is forcibly failed and the
/// executor disposes itself: the last-resort circuit breaker, independent of
/// any recursion or retry counting.
fn arm_timeout<S: BoardStore + 'static>(
    shared: &Arc<ExecutorShared<S>>,
    after: Duration,
) -> JoinHandle<()> {
    let shared = Arc::clone(shared);
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        if shared.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::warn!(
            board_id = %shared.board_id,
            timeout_secs = after.as_secs(),
            "run timeout elapsed; failing remaining tasks"
        );
        match shared.store.get_board(shared.board_id).await {
            Ok(Some(board)) => {
                for task in board.tasks.iter().filter(|t| !t.is_terminal()) {
                    let patch = TaskPatch::new()
                        .status(TaskStatus::Failed)
                        .error(REASON_TIMED_OUT);
                    if let Err(err) =
                        shared.store.update_task(board.id, task.id, patch).await
                    {
                        tracing::error!(task_id = %task.id, %err, "failed to persist timeout status");
                    }
                }
                if let Err(err) = shared.store.checkpoint().await {
                    tracing::warn!(board_id = %board.id, %err, "checkpoint after timeout failed");
                }
            }
            Ok(None) => {
                tracing::error!(board_id = %shared.board_id, "board missing at timeout");
            }
            Err(err) => {
                tracing::error!(board_id = %shared.board_id, %err, "board unavailable at timeout");
            }
        }
        shared.running.lock().await.clear();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::actors::MockActorFactory;
    use crate::adapters::memory::InMemoryBoardStore;

    async fn seeded_executor() -> (
        Arc<InMemoryBoardStore>,
        Arc<MockActorFactory>,
        BoardExecutor<InMemoryBoardStore>,
        Uuid,
    ) {
        let store = Arc::new(InMemoryBoardStore::new());
        let board = Board::new("Board");
        let board_id = board.id;
        store.insert_board(board).await;

        let factory = Arc::new(MockActorFactory::new());
        let executor =
            BoardExecutor::builder(Arc::clone(&store), board_id, factory.clone()).build();
        (store, factory, executor, board_id)
    }

    #[tokio::test]
    async fn test_empty_board_seeds_baseline_tasks() {
        let (store, _factory, executor, board_id) = seeded_executor().await;

        let summary = executor.execute_all_tasks().await;

        let board = store.get_board(board_id).await.unwrap().unwrap();
        assert_eq!(board.tasks.len(), 2);
        assert!(board.is_drained());
        assert_eq!(summary.completed_tasks, 2);
        assert_eq!(summary.failed_tasks, 0);

        let planner = board
            .tasks
            .iter()
            .find(|t| t.actor_type == ActorType::Planner)
            .unwrap();
        let composer = board
            .tasks
            .iter()
            .find(|t| t.actor_type == ActorType::Composer)
            .unwrap();
        assert_eq!(composer.dependencies, vec![planner.id]);
    }

    #[tokio::test]
    async fn test_execute_task_skips_terminal() {
        let (store, factory, executor, board_id) = seeded_executor().await;
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

        let outcome = executor.execute_task(task.id).await.unwrap();
        assert_eq!(outcome, TaskOutcome::Skipped);
        assert_eq!(factory.invocations().len(), 0);
    }

    #[tokio::test]
    async fn test_execute_task_repairs_board_id() {
        let (store, _factory, executor, board_id) = seeded_executor().await;
        let task = store
            .create_task(board_id, TaskDraft::new("T", "d", ActorType::Coder))
            .await
            .unwrap();
        store.corrupt_task_board_id(board_id, task.id).await;

        executor.execute_task(task.id).await.unwrap();

        let healed = store.task(board_id, task.id).await.unwrap();
        assert_eq!(healed.board_id, board_id);
        assert_eq!(healed.status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn test_disposed_executor_is_a_no_op() {
        let (store, factory, executor, board_id) = seeded_executor().await;
        let task = store
            .create_task(board_id, TaskDraft::new("T", "d", ActorType::Writer))
            .await
            .unwrap();

        executor.dispose().await;
        assert!(executor.is_disposed());

        let summary = executor.execute_all_tasks().await;
        assert_eq!(summary, ExecutionSummary::default());
        assert_eq!(
            executor.execute_task(task.id).await.unwrap(),
            TaskOutcome::Skipped
        );
        assert_eq!(factory.invocations().len(), 0);
    }

    #[tokio::test]
    async fn test_summary_success_rate() {
        let summary = ExecutionSummary {
            total_tasks: 4,
            completed_tasks: 3,
            failed_tasks: 1,
            ..ExecutionSummary::default()
        };
        assert!((summary.success_rate() - 0.75).abs() < f64::EPSILON);
        assert!((ExecutionSummary::default().success_rate()).abs() < f64::EPSILON);
    }
}
