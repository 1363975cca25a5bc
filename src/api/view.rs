//! GraphQL projection of a stored task.

use crate::task::domain::Task;
use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A to-do item as exposed over GraphQL.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Task")]
pub struct TaskView {
    /// Unique identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Whether the task is done.
    pub completed: bool,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last changed.
    pub updated_at: DateTime<Utc>,
    /// When the task has to be finished, if ever.
    pub deadline: Option<DateTime<Utc>>,
    /// Priority from 0 (low) to 10 (high).
    pub priority: i32,
}

impl From<Task> for TaskView {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            completed: task.is_completed(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
            deadline: task.deadline(),
            priority: task.priority().value(),
        }
    }
}
