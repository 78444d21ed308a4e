//! Mock actors for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ActorType, BoardTask, CustomActorDefinition};
use crate::domain::ports::{Actor, ActorFactory, CustomActorRunner, DocumentHandle};

/// Mock response configuration.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// Result payload on success
    pub result: Value,
    /// Whether to simulate failure
    pub fail: bool,
    /// Error message if failing
    pub error_message: Option<String>,
    /// Simulated work duration (milliseconds)
    pub delay_ms: u64,
    /// Never resolve; used for timeout and disposal tests
    pub hang: bool,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self {
            result: json!({"output": "mock task completed"}),
            fail: false,
            error_message: None,
            delay_ms: 0,
            hang: false,
        }
    }
}

impl MockResponse {
    pub fn success(result: Value) -> Self {
        Self {
            result,
            ..Default::default()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            fail: true,
            error_message: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Default::default()
        }
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

struct MockState {
    default_response: MockResponse,
    response_overrides: Mutex<HashMap<Uuid, MockResponse>>,
    invocations: Mutex<Vec<Uuid>>,
}

/// Factory producing scriptable mock actors.
///
/// Responses are configured per task ID; every actor invocation is recorded
/// so tests can assert ordering and call counts.
pub struct MockActorFactory {
    state: Arc<MockState>,
}

impl MockActorFactory {
    pub fn new() -> Self {
        Self::with_default_response(MockResponse::default())
    }

    pub fn with_default_response(response: MockResponse) -> Self {
        Self {
            state: Arc::new(MockState {
                default_response: response,
                response_overrides: Mutex::new(HashMap::new()),
                invocations: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Set a specific response for a task ID.
    pub fn set_response_for_task(&self, task_id: Uuid, response: MockResponse) {
        self.state
            .response_overrides
            .lock()
            .expect("mock state poisoned")
            .insert(task_id, response);
    }

    /// Task IDs in actor-invocation order.
    pub fn invocations(&self) -> Vec<Uuid> {
        self.state
            .invocations
            .lock()
            .expect("mock state poisoned")
            .clone()
    }

    /// How many times the given task reached an actor.
    pub fn invocation_count(&self, task_id: Uuid) -> usize {
        self.invocations().iter().filter(|&&id| id == task_id).count()
    }
}

impl Default for MockActorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorFactory for MockActorFactory {
    fn create(
        &self,
        _actor_type: ActorType,
        task: &BoardTask,
        _environment: Option<&Value>,
    ) -> Option<Box<dyn Actor>> {
        let response = self
            .state
            .response_overrides
            .lock()
            .expect("mock state poisoned")
            .get(&task.id)
            .cloned()
            .unwrap_or_else(|| self.state.default_response.clone());
        Some(Box::new(MockActor {
            state: Arc::clone(&self.state),
            response,
        }))
    }

    fn available_types(&self) -> Vec<ActorType> {
        ActorType::builtin().to_vec()
    }
}

/// Actor that replays its configured response.
pub struct MockActor {
    state: Arc<MockState>,
    response: MockResponse,
}

#[async_trait]
impl Actor for MockActor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn execute_task(
        &self,
        task: &BoardTask,
        _document: Option<Arc<dyn DocumentHandle>>,
    ) -> DomainResult<Value> {
        self.state
            .invocations
            .lock()
            .expect("mock state poisoned")
            .push(task.id);

        if self.response.hang {
            return futures::future::pending().await;
        }
        if self.response.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.response.delay_ms)).await;
        }
        if self.response.fail {
            let message = self
                .response
                .error_message
                .clone()
                .unwrap_or_else(|| "mock failure".to_string());
            return Err(DomainError::ExecutionFailed(message));
        }
        Ok(self.response.result.clone())
    }
}

/// Custom-actor runner that echoes the definition it ran.
pub struct MockCustomRunner {
    invocations: Mutex<Vec<(Uuid, Uuid)>>,
}

impl MockCustomRunner {
    pub fn new() -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// `(definition_id, task_id)` pairs in invocation order.
    pub fn invocations(&self) -> Vec<(Uuid, Uuid)> {
        self.invocations.lock().expect("mock state poisoned").clone()
    }
}

impl Default for MockCustomRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomActorRunner for MockCustomRunner {
    async fn run(
        &self,
        definition: &CustomActorDefinition,
        task: &BoardTask,
        _document: Option<Arc<dyn DocumentHandle>>,
    ) -> DomainResult<Value> {
        self.invocations
            .lock()
            .expect("mock state poisoned")
            .push((definition.id, task.id));
        Ok(json!({
            "actor": definition.name,
            "task": task.id.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_success() {
        let factory = MockActorFactory::new();
        let task = BoardTask::new(Uuid::new_v4(), "T", "d", ActorType::Writer);
        let actor = factory.create(ActorType::Writer, &task, None).unwrap();

        let value = actor.execute_task(&task, None).await.unwrap();
        assert_eq!(value, json!({"output": "mock task completed"}));
        assert_eq!(factory.invocation_count(task.id), 1);
    }

    #[tokio::test]
    async fn test_mock_failure_override() {
        let factory = MockActorFactory::new();
        let task = BoardTask::new(Uuid::new_v4(), "T", "d", ActorType::Writer);
        factory.set_response_for_task(task.id, MockResponse::failure("scripted error"));

        let actor = factory.create(ActorType::Writer, &task, None).unwrap();
        let err = actor.execute_task(&task, None).await.unwrap_err();
        assert!(err.to_string().contains("scripted error"));
    }

    #[tokio::test]
    async fn test_mock_records_order() {
        let factory = MockActorFactory::new();
        let first = BoardTask::new(Uuid::new_v4(), "A", "d", ActorType::Coder);
        let second = BoardTask::new(Uuid::new_v4(), "B", "d", ActorType::Coder);

        for task in [&first, &second] {
            let actor = factory.create(ActorType::Coder, task, None).unwrap();
            actor.execute_task(task, None).await.unwrap();
        }
        assert_eq!(factory.invocations(), vec![first.id, second.id]);
    }
}
