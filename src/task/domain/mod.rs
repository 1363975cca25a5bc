//! Domain model for task records.
//!
//! The domain owns validation, defaults, and timestamp rules. Persistence
//! and transport concerns stay outside this boundary.

mod error;
mod ids;
mod patch;
mod task;

pub use error::TaskDomainError;
pub use ids::{RandomTaskIds, TaskId, TaskIdSource, TaskPriority, TaskTitle};
pub use patch::{TaskFilter, TaskPatch};
pub use task::{NewTask, PersistedTaskData, Task};
