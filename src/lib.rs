//! Quillboard - Task Orchestration for AI Agent Boards
//!
//! Quillboard is the orchestration engine behind an AI "agent board"
//! embedded in a rich-document editor: interdependent tasks, each assigned
//! to a typed actor, executed in dependency order, recovered from partial
//! failure, protected from circular dependencies, and bounded by a global
//! timeout.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors, and the store/actor ports
//! - **Service Layer** (`services`): task graph, cycle detection, dispatch,
//!   stall governance, and the board executor
//! - **Adapters** (`adapters`): in-memory store and mock actors
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use quillboard::{BoardExecutor, InMemoryBoardStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(InMemoryBoardStore::new());
//!     // ... insert a board, register actor constructors ...
//!     let executor = BoardExecutor::builder(store, board_id, factory).build();
//!     executor.execute_all_tasks().await;
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::actors::{ActorRegistry, MockActorFactory, MockCustomRunner, MockResponse};
pub use adapters::memory::InMemoryBoardStore;
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    ActorConfig, ActorType, Board, BoardTask, Config, CustomActorDefinition, ExecutorConfig,
    LoggingConfig, TaskPriority, TaskStatus,
};
pub use domain::ports::{
    Actor, ActorFactory, BoardStore, CustomActorRunner, DocumentHandle, StoreError, TaskDraft,
    TaskPatch,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    ActorDispatcher, BoardExecutor, BoardExecutorBuilder, CycleDetector, ExecutionSummary,
    RetryGovernor, StallAction, TaskGraph, TaskOutcome,
};
