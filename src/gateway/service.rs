//! Gateway execution: argument coercion and repository dispatch.

use crate::gateway::{
    error::GatewayError,
    schema::{Operation, Schema},
    wire::{OperationRequest, OperationResponse, TaskView},
};
use crate::task::{
    domain::{TaskDraft, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde_json::{Map, Value};
use std::sync::Arc;

type GatewayResult<T> = Result<T, GatewayError>;

/// Stateless operation gateway over a task repository.
///
/// Each operation makes exactly one repository call; no task data is
/// cached between requests. Argument coercion failures are raised before
/// any storage access.
#[derive(Clone)]
pub struct TaskGateway<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    schema: Schema,
}

impl<R, C> TaskGateway<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a gateway, building and checking the operation schema.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            schema: Schema::new(),
        }
    }

    /// Returns the operation schema served by this gateway.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Executes a single operation, translating failures into wire error
    /// entries.
    pub async fn execute(&self, request: &OperationRequest) -> OperationResponse {
        match self.dispatch(request).await {
            Ok(payload) => OperationResponse::data(&request.operation, payload),
            Err(err) => OperationResponse::error(&err),
        }
    }

    /// Executes a sequence of operations in order.
    ///
    /// Operations fail independently: an error entry for one never aborts
    /// its siblings.
    pub async fn execute_batch(&self, requests: &[OperationRequest]) -> Vec<OperationResponse> {
        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            responses.push(self.execute(request).await);
        }
        responses
    }

    async fn dispatch(&self, request: &OperationRequest) -> GatewayResult<Value> {
        let operation = self.schema.resolve(&request.operation).ok_or_else(|| {
            GatewayError::BadRequest(format!("unknown operation: {}", request.operation))
        })?;
        tracing::debug!(
            operation = %request.operation,
            kind = ?operation.kind(),
            "executing gateway operation"
        );

        let arguments = &request.arguments;
        match operation {
            Operation::Tasks => self.tasks().await,
            Operation::Task => self.task(arguments).await,
            Operation::CreateTask => self.create_task(arguments).await,
            Operation::UpdateTask => self.update_task(arguments).await,
            Operation::DeleteTask => self.delete_task(arguments).await,
        }
    }

    async fn tasks(&self) -> GatewayResult<Value> {
        let tasks = self.repository.list_all().await?;
        let views: Vec<TaskView> = tasks.iter().map(TaskView::from).collect();
        to_payload(&views)
    }

    async fn task(&self, arguments: &Map<String, Value>) -> GatewayResult<Value> {
        let id = require_id(arguments)?;
        let found = self.repository.find_by_id(id).await?;
        found
            .as_ref()
            .map_or(Ok(Value::Null), |task| to_payload(&TaskView::from(task)))
    }

    async fn create_task(&self, arguments: &Map<String, Value>) -> GatewayResult<Value> {
        let title = require_title(arguments)?;
        let draft = TaskDraft::new(title, &*self.clock);
        let created = self.repository.create(draft).await?;
        to_payload(&TaskView::from(&created))
    }

    async fn update_task(&self, arguments: &Map<String, Value>) -> GatewayResult<Value> {
        let id = require_id(arguments)?;
        let title = optional_title(arguments)?;
        let completed = optional_completed(arguments)?;

        let mut patch = TaskPatch::new(&*self.clock);
        if let Some(title) = title {
            patch = patch.with_title(title);
        }
        if let Some(completed) = completed {
            patch = patch.with_completed(completed);
        }

        let updated = self.repository.update(id, patch).await?;
        to_payload(&TaskView::from(&updated))
    }

    async fn delete_task(&self, arguments: &Map<String, Value>) -> GatewayResult<Value> {
        let id = require_id(arguments)?;
        self.repository.delete(id).await?;
        Ok(Value::Bool(true))
    }
}

fn to_payload<T: serde::Serialize>(value: &T) -> GatewayResult<Value> {
    serde_json::to_value(value)
        .map_err(|err| GatewayError::from(TaskRepositoryError::persistence(err)))
}

/// Coerces the required `id` argument to a numeric task identifier.
///
/// Identifiers travel as strings on the wire; integer literals are also
/// accepted, matching how GraphQL coerces `ID` values. Anything
/// non-numeric fails before storage is touched.
fn require_id(arguments: &Map<String, Value>) -> GatewayResult<TaskId> {
    match arguments.get("id") {
        Some(Value::String(raw)) => raw
            .trim()
            .parse::<i64>()
            .map(TaskId::new)
            .map_err(|_| GatewayError::BadRequest(format!("invalid id: {raw}"))),
        Some(Value::Number(raw)) => raw
            .as_i64()
            .map(TaskId::new)
            .ok_or_else(|| GatewayError::BadRequest(format!("invalid id: {raw}"))),
        Some(other) => Err(GatewayError::BadRequest(format!(
            "id must be a string, got: {other}"
        ))),
        None => Err(GatewayError::BadRequest(
            "missing required argument: id".to_owned(),
        )),
    }
}

fn require_title(arguments: &Map<String, Value>) -> GatewayResult<TaskTitle> {
    match arguments.get("title") {
        Some(Value::String(raw)) => Ok(TaskTitle::new(raw.as_str())?),
        Some(other) => Err(GatewayError::BadRequest(format!(
            "title must be a string, got: {other}"
        ))),
        None => Err(GatewayError::BadRequest(
            "missing required argument: title".to_owned(),
        )),
    }
}

/// Reads the optional `title` argument.
///
/// An absent key and an explicit `null` both mean "leave unchanged"; a
/// supplied string still has to pass domain validation.
fn optional_title(arguments: &Map<String, Value>) -> GatewayResult<Option<TaskTitle>> {
    match arguments.get("title") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => Ok(Some(TaskTitle::new(raw.as_str())?)),
        Some(other) => Err(GatewayError::BadRequest(format!(
            "title must be a string, got: {other}"
        ))),
    }
}

/// Reads the optional `completed` argument.
///
/// Omission is distinguishable from an explicit `false`: absent (or
/// `null`) leaves the flag unchanged, `false` clears it.
fn optional_completed(arguments: &Map<String, Value>) -> GatewayResult<Option<bool>> {
    match arguments.get("completed") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(other) => Err(GatewayError::BadRequest(format!(
            "completed must be a boolean, got: {other}"
        ))),
    }
}
