pub mod actor;
pub mod board_store;
pub mod errors;

pub use actor::{Actor, ActorFactory, CustomActorRunner, DocumentHandle};
pub use board_store::{BoardStore, TaskDraft, TaskPatch};
pub use errors::StoreError;
