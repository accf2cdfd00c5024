//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskDraft, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the task adapter.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
///
/// Connections are acquired from the pool per operation and released on
/// completion; Diesel statements run on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(&draft);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task> {
        let changeset = to_changeset(&patch);
        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set(&changeset)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task)
                .transpose()?
                .ok_or(TaskRepositoryError::NotFound(id))
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if removed == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(draft: &TaskDraft) -> NewTaskRow {
    NewTaskRow {
        title: draft.title().as_str().to_owned(),
        completed: draft.completed(),
        created_at: draft.created_at(),
        updated_at: draft.updated_at(),
    }
}

fn to_changeset(patch: &TaskPatch) -> TaskChangeset {
    TaskChangeset {
        title: patch.title().map(|title| title.as_str().to_owned()),
        completed: patch.completed(),
        updated_at: patch.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        completed,
        created_at,
        updated_at,
    } = row;

    // The schema's check constraint keeps titles non-blank; a violation
    // here means the stored data is corrupt, which is a persistence error.
    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::new(id),
        title,
        completed,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
