//! Command-line and environment configuration for the server binary.

use crate::task::adapters::sqlite::SqliteStorageConfig;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server settings, read from flags with environment fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "taskql", version, about = "GraphQL task API over a local SQLite file")]
pub struct ServerConfig {
    /// SQLite database file.
    #[arg(long, env = "TASKQL_DATABASE", default_value = SqliteStorageConfig::DEFAULT_PATH)]
    pub database: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "TASKQL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TASKQL_POOL_SIZE", default_value_t = 4)]
    pub pool_size: u32,

    /// Milliseconds SQLite waits on a locked database before failing.
    #[arg(long, env = "TASKQL_BUSY_TIMEOUT_MS", default_value_t = 5000)]
    pub busy_timeout_ms: u64,
}

impl ServerConfig {
    /// Returns the storage settings derived from this configuration.
    #[must_use]
    pub fn storage(&self) -> SqliteStorageConfig {
        SqliteStorageConfig::new(self.database.clone())
            .with_max_connections(self.pool_size)
            .with_busy_timeout(Duration::from_millis(self.busy_timeout_ms))
    }
}
