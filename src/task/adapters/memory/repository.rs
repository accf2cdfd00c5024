//! In-memory repository for task storage and tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers come from a monotonic counter that survives deletions, so
/// an id is never reused. The `BTreeMap` keeps `list_all` ordering stable
/// by ascending id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    next_id: i64,
}

impl InMemoryTaskState {
    fn assign_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId::new(self.next_id)
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let id = state.assign_id();
        let task = draft.into_task(id);
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply(&patch);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
