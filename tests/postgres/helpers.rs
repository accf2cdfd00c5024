//! Shared helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, TemporaryDatabase, postgres_cluster};
use super::cluster::EmbeddedCluster;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use taskboard::task::adapters::postgres::PostgresTaskRepository;
use tokio::runtime::Runtime;

/// SQL to create the tasks schema.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-08-20-000000_create_tasks/up.sql");

/// Template database holding the migrated schema.
pub const TEMPLATE_DB: &str = "taskboard_test_template";

/// Builds a single-threaded runtime for driving async repository calls.
///
/// # Errors
///
/// Returns an error when runtime construction fails.
pub fn test_runtime() -> Result<Runtime, BoxError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| Box::new(err) as BoxError)
}

/// Ensures the template database exists with the tasks schema applied.
///
/// # Errors
///
/// Returns an error when template creation or migration fails.
pub fn ensure_template(cluster: &EmbeddedCluster) -> Result<(), BoxError> {
    let connection = cluster.connection();
    cluster.ensure_template_exists(TEMPLATE_DB, move |db_name| {
        apply_schema(&connection.database_url(db_name))
    })
}

fn apply_schema(url: &str) -> Result<(), BoxError> {
    let mut connection = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    connection
        .batch_execute(CREATE_SCHEMA_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// Clones the template into a fresh database and builds a repository over
/// a single-connection pool.
///
/// # Errors
///
/// Returns an error when template setup, database creation, or pool
/// construction fails.
pub fn setup_repository(
    cluster: PostgresCluster,
) -> Result<(TemporaryDatabase, PostgresTaskRepository), BoxError> {
    ensure_template(cluster)?;
    let temp_db = TemporaryDatabase::from_template(cluster, TEMPLATE_DB)?;

    let manager = ConnectionManager::<PgConnection>::new(temp_db.url());
    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|err| Box::new(err) as BoxError)?;

    Ok((temp_db, PostgresTaskRepository::new(pool)))
}
