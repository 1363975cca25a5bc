//! Partial updates and list filters for tasks.

use super::{Task, TaskPriority, TaskTitle};
use chrono::{DateTime, Utc};

/// Fields to overwrite on an existing task.
///
/// `None` means the field was not supplied and must be left untouched; there
/// is no way to clear a field through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Replacement priority.
    pub priority: Option<TaskPriority>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies a new title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
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
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns `true` when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.deadline.is_none() && self.priority.is_none()
    }
}

/// Criteria for listing tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    title_contains: Option<String>,
}

impl TaskFilter {
    /// Matches every task.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches tasks whose title contains `search`, ignoring case.
    #[must_use]
    pub fn title_contains(search: impl Into<String>) -> Self {
        Self {
            title_contains: Some(search.into()),
        }
    }

    /// Builds a filter from an optional search term.
    #[must_use]
    pub fn from_search(search: Option<String>) -> Self {
        Self {
            title_contains: search,
        }
    }

    /// Returns the search term, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.title_contains.as_deref()
    }

    /// Returns `true` when `task` satisfies the filter.
    ///
    /// Only ASCII letters are folded, matching SQLite `LIKE`.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.title_contains.as_ref().is_none_or(|needle| {
            task.title()
                .as_str()
                .to_ascii_lowercase()
                .contains(&needle.to_ascii_lowercase())
        })
    }
}
