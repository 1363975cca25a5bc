//! Taskql: a GraphQL task-management API over a local SQLite store.
//!
//! Clients create, query, complete, update, and delete task records through
//! a typed query-and-mutation schema.
//!
//! # Architecture
//!
//! Taskql follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, storage, and query/mutation services
//! - [`api`]: GraphQL schema and HTTP router
//! - [`config`]: Server configuration
//! - [`telemetry`]: Logging setup

pub mod api;
pub mod config;
pub mod task;
pub mod telemetry;
