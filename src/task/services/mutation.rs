//! Task creation, completion, update, and deletion.

use super::TaskServiceResult;
use crate::task::{
    domain::{
        NewTask, RandomTaskIds, Task, TaskId, TaskIdSource, TaskPatch, TaskPriority, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    deadline: Option<DateTime<Utc>>,
    priority: Option<i32>,
}

impl AddTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            deadline: None,
            priority: None,
        }
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the priority. Omitting it yields [`TaskPriority::DEFAULT`].
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Request payload for updating a task.
///
/// Only supplied fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    deadline: Option<DateTime<Utc>>,
    priority: Option<i32>,
}

impl UpdateTaskRequest {
    /// Creates a request that supplies no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Supplies a new deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Supplies a new priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    fn into_patch(self) -> TaskServiceResult<TaskPatch> {
        let Self {
            title,
            deadline,
            priority,
        } = self;
        let mut patch = TaskPatch::new();
        if let Some(raw_title) = title {
            patch = patch.with_title(TaskTitle::new(raw_title)?);
        }
        if let Some(new_deadline) = deadline {
            patch = patch.with_deadline(new_deadline);
        }
        if let Some(new_priority) = priority {
            patch = patch.with_priority(TaskPriority::new(new_priority));
        }
        Ok(patch)
    }
}

/// Task mutation service.
pub struct TaskMutationService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    ids: Arc<dyn TaskIdSource>,
}

impl<R, C> Clone for TaskMutationService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            ids: Arc::clone(&self.ids),
        }
    }
}

impl<R, C> TaskMutationService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a mutation service that draws random identifiers.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            ids: Arc::new(RandomTaskIds),
        }
    }

    /// Replaces the identifier source.
    #[must_use]
    pub fn with_id_source(mut self, ids: Arc<dyn TaskIdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Creates a new, incomplete task and returns it as stored.
    ///
    /// Candidate identifiers are drawn until one is unused in storage.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Domain`] when the title is blank and
    /// [`super::TaskServiceError::Repository`] when storage fails.
    pub async fn add_task(&self, request: AddTaskRequest) -> TaskServiceResult<Task> {
        let AddTaskRequest {
            title,
            deadline,
            priority,
        } = request;

        let mut input = NewTask::new(TaskTitle::new(title)?);
        if let Some(value) = deadline {
            input = input.with_deadline(value);
        }
        if let Some(value) = priority {
            input = input.with_priority(TaskPriority::new(value));
        }

        let id = self.unused_id().await?;
        let task = Task::new(id, input, &*self.clock);
        let stored = self.repository.store(&task).await?;
        tracing::debug!(task_id = %stored.id(), "task created");
        Ok(stored)
    }

    /// Marks a task as completed and returns it as stored.
    ///
    /// Completion is one-way; toggling a completed task keeps it completed
    /// and only refreshes `updated_at`. Returns `Ok(None)` when no task
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when storage fails.
    pub async fn toggle_task(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            tracing::warn!(task_id = %id, "task not found for toggling");
            return Ok(None);
        };

        task.mark_completed(&*self.clock);
        self.persist_update(&task, "toggling").await
    }

    /// Deletes a task and returns its state immediately before deletion.
    ///
    /// Returns `Ok(None)` when no task matches.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when storage fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        let removed = self.repository.delete(id).await?;
        match &removed {
            Some(task) => tracing::debug!(task_id = %task.id(), "task deleted"),
            None => tracing::warn!(task_id = %id, "task not found for deletion"),
        }
        Ok(removed)
    }

    /// Overwrites the supplied fields of a task and returns it as stored.
    ///
    /// `updated_at` is refreshed whenever the task exists, even if the request
    /// supplies no fields. Returns `Ok(None)` when no task matches, whatever
    /// the request holds.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Domain`] when a supplied title is
    /// blank and [`super::TaskServiceError::Repository`] when storage fails.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            tracing::warn!(task_id = %id, "task not found for update");
            return Ok(None);
        };
        let patch = request.into_patch()?;

        task.apply(patch, &*self.clock);
        self.persist_update(&task, "update").await
    }

    async fn unused_id(&self) -> TaskServiceResult<TaskId> {
        loop {
            let candidate = self.ids.next_id();
            if !self.repository.exists(candidate).await? {
                return Ok(candidate);
            }
            tracing::debug!(task_id = %candidate, "generated task id already in use, retrying");
        }
    }

    /// Writes `task` back, treating a concurrent deletion as not-found.
    async fn persist_update(&self, task: &Task, action: &str) -> TaskServiceResult<Option<Task>> {
        match self.repository.update(task).await {
            Ok(stored) => {
                tracing::debug!(task_id = %stored.id(), "task updated");
                Ok(Some(stored))
            }
            Err(TaskRepositoryError::NotFound(id)) => {
                tracing::warn!(task_id = %id, "task not found for {action}");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
