//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Storage-assigned task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
///
/// The identifier is omitted so the database sequence assigns it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset for partial task updates.
///
/// `None` fields are skipped by Diesel, giving partial-update semantics;
/// `updated_at` is always present so every successful update refreshes it.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title, if supplied.
    pub title: Option<String>,
    /// Replacement completion flag, if supplied.
    pub completed: Option<bool>,
    /// New mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
