pub mod cycle_detector;
pub mod dispatcher;
pub mod executor;
pub mod governor;
pub mod task_graph;

pub use cycle_detector::{CycleDetector, CycleReport};
pub use dispatcher::{ActorDispatcher, DefinedActor};
pub use executor::{BoardExecutor, BoardExecutorBuilder, ExecutionSummary, TaskOutcome};
pub use governor::{RetryGovernor, StallAction};
pub use task_graph::{ReadyPartition, TaskGraph};
