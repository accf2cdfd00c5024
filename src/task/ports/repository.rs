//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// The repository is the sole authority over stored tasks. Each operation
/// completes in a single round trip to storage; none hold resources across
/// calls.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task, ordered by ascending identifier.
    ///
    /// Returns an empty vector when no tasks exist.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist; a well-formed but
    /// absent identifier is not an error.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Persists a new task, assigning a fresh identifier.
    ///
    /// Identifiers are never reused, including after deletion. Returns the
    /// stored record.
    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Applies a partial update to an existing task.
    ///
    /// Fields absent from the patch are left unchanged; `updated_at` is
    /// always refreshed to the patch timestamp. Returns the full updated
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has the
    /// given identifier.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task>;

    /// Removes a task. Hard delete, no tombstone.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has the
    /// given identifier, so callers can distinguish "it's gone" from
    /// "nothing happened".
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
