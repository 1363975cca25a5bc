//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Hyphenated task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last update timestamp.
    pub updated_at: NaiveDateTime,
    /// Optional deadline.
    pub deadline: Option<NaiveDateTime>,
    /// Task priority.
    pub priority: i32,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Hyphenated task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last update timestamp.
    pub updated_at: NaiveDateTime,
    /// Optional deadline.
    pub deadline: Option<NaiveDateTime>,
    /// Task priority.
    pub priority: i32,
}

/// Changeset for mutable task columns.
///
/// `id` and `created_at` are deliberately absent so updates can never
/// rewrite them.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Last update timestamp.
    pub updated_at: NaiveDateTime,
    /// Optional deadline.
    pub deadline: Option<NaiveDateTime>,
    /// Task priority.
    pub priority: i32,
}
