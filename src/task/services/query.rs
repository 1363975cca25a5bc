//! Read-only task lookups.

use super::TaskServiceResult;
use crate::task::{
    domain::{Task, TaskFilter, TaskId},
    ports::TaskRepository,
};
use std::sync::Arc;

/// Task query service.
pub struct TaskQueryService<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskQueryService<R>
where
    R: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskQueryService<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates a new task query service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every task, or only those whose title contains `search`
    /// ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_tasks(&self, search: Option<String>) -> TaskServiceResult<Vec<Task>> {
        let filter = TaskFilter::from_search(search);
        Ok(self.repository.list(&filter).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task matches.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        let task = self.repository.find_by_id(id).await?;
        if task.is_none() {
            tracing::warn!(task_id = %id, "task not found");
        }
        Ok(task)
    }
}
