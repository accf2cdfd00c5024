//! Task aggregate root and its creation and update payloads.

use super::{TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// The identifier is assigned by the storage adapter; everything else is
/// fixed at creation and changed only through [`TaskPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update in place.
    ///
    /// Fields absent from the patch are left unchanged; `updated_at` is
    /// always set to the patch timestamp.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = patch.title() {
            self.title = title.clone();
        }
        if let Some(completed) = patch.completed() {
            self.completed = completed;
        }
        self.updated_at = patch.updated_at();
    }
}

/// Payload for creating a new task.
///
/// Carries everything except the identifier, which the storage adapter
/// assigns on insert. New tasks start uncompleted with
/// `created_at == updated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskDraft {
    /// Creates a draft with creation-time defaults stamped from the clock.
    #[must_use]
    pub fn new(title: TaskTitle, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            title,
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the draft title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the initial completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the initial mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Builds the stored task once the adapter has assigned an identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial-update payload for an existing task.
///
/// Only the fields set on the patch are applied; omission means "leave
/// unchanged", never "reset to a default". The timestamp is stamped at
/// construction and becomes the task's new `updated_at` regardless of
/// which fields are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    completed: Option<bool>,
    updated_at: DateTime<Utc>,
}

impl TaskPatch {
    /// Creates an empty patch stamped from the clock.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            title: None,
            completed: None,
            updated_at: clock.utc(),
        }
    }

    /// Sets the new title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the new completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns the replacement title, if supplied.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the replacement completion flag, if supplied.
    #[must_use]
    pub const fn completed(&self) -> Option<bool> {
        self.completed
    }

    /// Returns the timestamp applied as the task's new `updated_at`.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
