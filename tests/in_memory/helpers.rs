//! Shared fixtures and response helpers for gateway integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use std::sync::Arc;
use taskboard::gateway::{OperationRequest, OperationResponse, TaskGateway, TaskView};
use taskboard::task::adapters::memory::InMemoryTaskRepository;

/// Gateway type under test.
pub type TestGateway = TaskGateway<InMemoryTaskRepository, DefaultClock>;

/// Provides a gateway over a fresh in-memory repository.
#[fixture]
pub fn gateway() -> TestGateway {
    TaskGateway::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Extracts the payload keyed by `operation` from a success response.
///
/// # Panics
///
/// Panics when the response is an error envelope or the key is missing,
/// which fails the calling test with the offending response in the
/// message.
pub fn payload(response: &OperationResponse, operation: &str) -> Value {
    assert!(
        response.errors.is_none(),
        "expected success, got errors: {:?}",
        response.errors
    );
    response
        .data
        .as_ref()
        .and_then(|data| data.get(operation))
        .unwrap_or_else(|| panic!("missing data entry for {operation}"))
        .clone()
}

/// Extracts a task view from a success response.
///
/// # Panics
///
/// Panics when the payload does not deserialize as a task.
pub fn task_payload(response: &OperationResponse, operation: &str) -> TaskView {
    serde_json::from_value(payload(response, operation)).expect("payload should be a task")
}

/// Returns the single error code carried by an error response.
///
/// # Panics
///
/// Panics when the response is not an error envelope with exactly one
/// entry.
pub fn error_code(response: &OperationResponse) -> String {
    let errors = response
        .errors
        .as_ref()
        .expect("expected an error envelope");
    assert_eq!(errors.len(), 1, "expected exactly one error entry");
    errors
        .first()
        .map(|entry| entry.code.clone())
        .expect("one error entry")
}

/// Builds a `createTask` request.
pub fn create_request(title: &str) -> OperationRequest {
    OperationRequest::new("createTask").with_argument("title", title)
}

/// Creates a task through the gateway and returns its wire view.
pub async fn create_task(gateway: &TestGateway, title: &str) -> TaskView {
    let response = gateway.execute(&create_request(title)).await;
    task_payload(&response, "createTask")
}
