//! Application services for task queries and mutations.

mod error;
mod mutation;
mod query;

pub use error::{TaskServiceError, TaskServiceResult};
pub use mutation::{AddTaskRequest, TaskMutationService, UpdateTaskRequest};
pub use query::TaskQueryService;
