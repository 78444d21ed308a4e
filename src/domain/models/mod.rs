pub mod actor;
pub mod board;
pub mod config;
pub mod task;

pub use actor::{ActorConfig, ActorType, CustomActorDefinition};
pub use board::Board;
pub use config::{Config, ExecutorConfig, LoggingConfig};
pub use task::{BoardTask, TaskPriority, TaskStatus};
