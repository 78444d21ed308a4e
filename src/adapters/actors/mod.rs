pub mod mock;
pub mod registry;

pub use mock::{MockActor, MockActorFactory, MockCustomRunner, MockResponse};
pub use registry::ActorRegistry;
