//! Repository contract tests against the embedded `PostgreSQL` cluster.

use super::helpers::{
    PostgresCluster, TemporaryDatabase, postgres_cluster, setup_repository, test_runtime,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::time::Duration;
use taskboard::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{Task, TaskDraft, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use tokio::runtime::Runtime;

struct RepoContext {
    repository: PostgresTaskRepository,
    rt: Runtime,
    _db: TemporaryDatabase,
}

#[fixture]
fn repo_context(postgres_cluster: PostgresCluster) -> RepoContext {
    let (db, repository) = setup_repository(postgres_cluster).expect("repository setup");
    let rt = test_runtime().expect("tokio runtime");
    RepoContext {
        repository,
        rt,
        _db: db,
    }
}

fn draft(title: &str) -> TaskDraft {
    TaskDraft::new(TaskTitle::new(title).expect("valid title"), &DefaultClock)
}

#[rstest]
fn create_assigns_sequential_ids_and_round_trips(repo_context: RepoContext) {
    let ctx = repo_context;

    let created = ctx
        .rt
        .block_on(ctx.repository.create(draft("Buy milk")))
        .expect("create should succeed");
    assert!(!created.completed());
    assert_eq!(created.created_at(), created.updated_at());

    let found = ctx
        .rt
        .block_on(ctx.repository.find_by_id(created.id()))
        .expect("lookup should succeed");
    assert_eq!(found, Some(created));
}

#[rstest]
fn find_by_id_returns_none_for_absent_id(repo_context: RepoContext) {
    let ctx = repo_context;

    let found = ctx
        .rt
        .block_on(ctx.repository.find_by_id(TaskId::new(404)))
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
fn list_all_returns_tasks_in_id_order(repo_context: RepoContext) {
    let ctx = repo_context;

    let first = ctx
        .rt
        .block_on(ctx.repository.create(draft("First")))
        .expect("create should succeed");
    let second = ctx
        .rt
        .block_on(ctx.repository.create(draft("Second")))
        .expect("create should succeed");
    assert!(first.id() < second.id());

    let listed = ctx
        .rt
        .block_on(ctx.repository.list_all())
        .expect("list should succeed");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed.first().map(Task::id), Some(first.id()));
}

#[rstest]
fn update_applies_partial_patch_and_refreshes_timestamp(repo_context: RepoContext) {
    let ctx = repo_context;

    let created = ctx
        .rt
        .block_on(ctx.repository.create(draft("Buy milk")))
        .expect("create should succeed");

    std::thread::sleep(Duration::from_millis(5));
    let patch = TaskPatch::new(&DefaultClock).with_completed(true);
    let updated = ctx
        .rt
        .block_on(ctx.repository.update(created.id(), patch))
        .expect("update should succeed");

    assert_eq!(updated.title(), created.title());
    assert!(updated.completed());
    assert!(updated.updated_at() > created.updated_at());
    assert_eq!(updated.created_at(), created.created_at());
}

#[rstest]
fn update_of_absent_id_fails_not_found(repo_context: RepoContext) {
    let ctx = repo_context;

    let patch = TaskPatch::new(&DefaultClock).with_completed(true);
    let result = ctx.rt.block_on(ctx.repository.update(TaskId::new(404), patch));
    assert!(matches!(result, Err(TaskRepositoryError::NotFound(_))));
}

#[rstest]
fn delete_is_hard_and_never_silently_repeats(repo_context: RepoContext) {
    let ctx = repo_context;

    let created = ctx
        .rt
        .block_on(ctx.repository.create(draft("Ephemeral")))
        .expect("create should succeed");

    ctx.rt
        .block_on(ctx.repository.delete(created.id()))
        .expect("first delete should succeed");
    let found = ctx
        .rt
        .block_on(ctx.repository.find_by_id(created.id()))
        .expect("lookup should succeed");
    assert!(found.is_none());

    let second = ctx.rt.block_on(ctx.repository.delete(created.id()));
    assert!(matches!(second, Err(TaskRepositoryError::NotFound(_))));
}

#[rstest]
fn ids_are_never_reused_after_delete(repo_context: RepoContext) {
    let ctx = repo_context;

    let first = ctx
        .rt
        .block_on(ctx.repository.create(draft("First")))
        .expect("create should succeed");
    ctx.rt
        .block_on(ctx.repository.delete(first.id()))
        .expect("delete should succeed");

    let second = ctx
        .rt
        .block_on(ctx.repository.create(draft("Second")))
        .expect("create should succeed");
    assert!(second.id() > first.id());
}
