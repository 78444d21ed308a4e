//! Registry of built-in actor constructors.
//!
//! Hosts register one constructor per built-in actor type; the dispatcher
//! asks the registry to build an actor per call, with the task and the
//! opaque execution-environment configuration as arguments.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::models::{ActorType, BoardTask};
use crate::domain::ports::{Actor, ActorFactory};

type ActorConstructor = Box<dyn Fn(&BoardTask, Option<&Value>) -> Box<dyn Actor> + Send + Sync>;

/// Maps built-in actor types to host-supplied constructors.
#[derive(Default)]
pub struct ActorRegistry {
    constructors: HashMap<ActorType, ActorConstructor>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for one built-in type. Registering `Custom`
    /// here has no effect; custom tasks resolve through the store.
    pub fn register<F>(mut self, actor_type: ActorType, constructor: F) -> Self
    where
        F: Fn(&BoardTask, Option<&Value>) -> Box<dyn Actor> + Send + Sync + 'static,
    {
        if actor_type.is_custom() {
            tracing::warn!("ignoring registration for the custom actor type");
            return self;
        }
        self.constructors.insert(actor_type, Box::new(constructor));
        self
    }

    /// Whether a type has a constructor.
    pub fn supports(&self, actor_type: ActorType) -> bool {
        self.constructors.contains_key(&actor_type)
    }
}

impl ActorFactory for ActorRegistry {
    fn create(
        &self,
        actor_type: ActorType,
        task: &BoardTask,
        environment: Option<&Value>,
    ) -> Option<Box<dyn Actor>> {
        self.constructors
            .get(&actor_type)
            .map(|constructor| constructor(task, environment))
    }

    fn available_types(&self) -> Vec<ActorType> {
        let mut types: Vec<ActorType> = self.constructors.keys().copied().collect();
        types.sort_by_key(ActorType::as_str);
        types
    }
}
