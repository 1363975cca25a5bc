//! SQLite adapters for task persistence.

mod models;
mod pool;
mod repository;
mod schema;

pub use pool::{SqliteStorageConfig, StorageError, TaskSqlitePool, open_pool};
pub use repository::SqliteTaskRepository;
