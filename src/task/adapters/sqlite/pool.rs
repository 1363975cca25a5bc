//! Storage handle: a lazily opened pool of SQLite connections.
//!
//! The pool keeps no idle connections, so the database file is first opened
//! by the schema bootstrap and afterwards on demand. Each checkout is a
//! [`PooledConnection`](diesel::r2d2::PooledConnection) that returns to the
//! pool when dropped.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PoolError};
use diesel::sqlite::SqliteConnection;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// SQLite connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

const CREATE_TASKS_SQL: &str = include_str!("create_tasks.sql");

/// Settings for opening the task database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteStorageConfig {
    path: PathBuf,
    max_connections: u32,
    busy_timeout: Duration,
    connection_timeout: Duration,
}

impl SqliteStorageConfig {
    /// Default database file, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "tasks.db";

    /// Creates settings for the database file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 4,
            busy_timeout: Duration::from_secs(5),
            connection_timeout: Duration::from_secs(10),
        }
    }

    /// Sets the maximum number of pooled connections.
    #[must_use]
    pub const fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Sets how long SQLite waits on a locked database before failing.
    #[must_use]
    pub const fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    /// Sets how long to wait for a pooled connection before failing.
    #[must_use]
    pub const fn with_connection_timeout(mut self, connection_timeout: Duration) -> Self {
        self.connection_timeout = connection_timeout;
        self
    }

    /// Returns the database file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for SqliteStorageConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

/// Errors raised while opening the task database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The pool could not hand out a connection.
    #[error("failed to open task database {}: {source}", .path.display())]
    Pool {
        /// Database file path.
        path: PathBuf,
        /// Underlying pool failure.
        #[source]
        source: PoolError,
    },

    /// The `tasks` table could not be created.
    #[error("failed to create task schema: {0}")]
    Schema(#[from] diesel::result::Error),
}

/// Applies per-connection pragmas when the pool opens a connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        connection
            .batch_execute(&format!(
                "PRAGMA busy_timeout = {};",
                self.busy_timeout.as_millis()
            ))
            .map_err(r2d2::Error::QueryError)
    }
}

/// Opens the connection pool and ensures the `tasks` table exists.
///
/// # Errors
///
/// Returns [`StorageError::Pool`] when the database file cannot be opened and
/// [`StorageError::Schema`] when the table cannot be created.
pub fn open_pool(config: &SqliteStorageConfig) -> Result<TaskSqlitePool, StorageError> {
    let database_url = config.path.to_string_lossy().into_owned();
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(config.max_connections.max(1))
        .min_idle(Some(0))
        .connection_timeout(config.connection_timeout)
        .connection_customizer(Box::new(SqlitePragmas {
            busy_timeout: config.busy_timeout,
        }))
        .build_unchecked(manager);

    let mut connection = pool.get().map_err(|source| StorageError::Pool {
        path: config.path.clone(),
        source,
    })?;
    connection.batch_execute(CREATE_TASKS_SQL)?;
    tracing::debug!(path = %config.path.display(), "task schema ready");
    Ok(pool)
}
