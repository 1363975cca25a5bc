//! Task aggregate root.

use super::{TaskId, TaskPatch, TaskPriority, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deadline: Option<DateTime<Utc>>,
    priority: TaskPriority,
}

/// Caller-supplied values for a task that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    deadline: Option<DateTime<Utc>>,
    priority: TaskPriority,
}

impl NewTask {
    /// Creates creation input with the default priority and no deadline.
    #[must_use]
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            deadline: None,
            priority: TaskPriority::default(),
        }
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Parameter object for reconstructing a persisted task aggregate.
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
    /// Persisted deadline, if any.
    pub deadline: Option<DateTime<Utc>>,
    /// Persisted priority.
    pub priority: TaskPriority,
}

impl Task {
    /// Creates a new, incomplete task with both timestamps set to now.
    #[must_use]
    pub fn new(id: TaskId, input: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title: input.title,
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
            deadline: input.deadline,
            priority: input.priority,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
            deadline: data.deadline,
            priority: data.priority,
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

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
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

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Marks the task as completed.
    ///
    /// This is one-way: a completed task stays completed. The timestamp is
    /// refreshed either way.
    pub fn mark_completed(&mut self, clock: &impl Clock) {
        self.completed = true;
        self.touch(clock);
    }

    /// Overwrites every field supplied in `patch` and leaves the rest intact.
    ///
    /// `updated_at` is refreshed even when the patch is empty.
    pub fn apply(&mut self, patch: TaskPatch, clock: &impl Clock) {
        let TaskPatch {
            title,
            deadline,
            priority,
        } = patch;
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_deadline) = deadline {
            self.deadline = Some(new_deadline);
        }
        if let Some(new_priority) = priority {
            self.priority = new_priority;
        }
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    ///
    /// The clock never moves `updated_at` behind `created_at`.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.created_at);
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(id={}, title={:?}, completed={}, priority={})",
            self.id,
            self.title.as_str(),
            self.completed,
            self.priority
        )
    }
}
