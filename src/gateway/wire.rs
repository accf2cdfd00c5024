//! Wire-level request and response shapes.

use crate::gateway::error::GatewayError;
use crate::task::domain::Task;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single named operation with its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    /// Wire operation name, e.g. `createTask`.
    pub operation: String,
    /// Operation arguments. Absent keys are distinguishable from keys set
    /// to `null` or `false`.
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl OperationRequest {
    /// Creates a request with no arguments.
    #[must_use]
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            arguments: Map::new(),
        }
    }

    /// Adds an argument.
    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }
}

/// Response envelope: either `data` keyed by operation name, or `errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    /// Per-operation payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Error entries, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<WireError>>,
}

impl OperationResponse {
    /// Builds a success envelope with the payload keyed by operation name.
    #[must_use]
    pub fn data(operation: &str, payload: Value) -> Self {
        let mut keyed = Map::new();
        keyed.insert(operation.to_owned(), payload);
        Self {
            data: Some(Value::Object(keyed)),
            errors: None,
        }
    }

    /// Builds an error envelope from a gateway error.
    #[must_use]
    pub fn error(err: &GatewayError) -> Self {
        Self {
            data: None,
            errors: Some(vec![WireError::from_gateway(err)]),
        }
    }
}

/// A single wire error entry with a stable machine-readable code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireError {
    /// Human-readable message.
    pub message: String,
    /// Stable reason code, e.g. `NOT_FOUND`.
    pub code: String,
}

impl WireError {
    fn from_gateway(err: &GatewayError) -> Self {
        Self {
            message: err.to_string(),
            code: err.code().to_owned(),
        }
    }
}

/// Wire representation of a task.
///
/// The identifier travels as a string even though it is stored as an
/// integer; timestamps are RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier, stringified.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Last mutation timestamp, RFC 3339.
    pub updated_at: String,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().as_str().to_owned(),
            completed: task.completed(),
            created_at: task.created_at().to_rfc3339(),
            updated_at: task.updated_at().to_rfc3339(),
        }
    }
}
