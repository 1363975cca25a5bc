//! Serves the task GraphQL API over HTTP.
//!
//! Usage:
//!
//! ```text
//! taskql [--database tasks.db] [--bind 127.0.0.1:8000]
//! ```
//!
//! Every flag also reads a `TASKQL_*` environment variable; see
//! `taskql --help`. Log verbosity follows `RUST_LOG`.

use clap::Parser;
use std::sync::Arc;
use taskql::{
    api,
    config::ServerConfig,
    task::{
        adapters::sqlite::{SqliteTaskRepository, open_pool},
        ports::TaskRepository,
    },
    telemetry,
};
use tokio::net::TcpListener;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    telemetry::init_tracing()?;

    let storage = config.storage();
    let pool = tokio::task::spawn_blocking(move || open_pool(&storage)).await??;
    let repository: Arc<dyn TaskRepository> = Arc::new(SqliteTaskRepository::new(pool));
    let schema = api::schema_for_repository(repository);

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        database = %config.database.display(),
        "taskql listening"
    );
    api::serve(listener, schema).await?;
    Ok(())
}
