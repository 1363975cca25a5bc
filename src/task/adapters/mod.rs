//! Adapter implementations of the task ports.
//!
//! - [`sqlite`]: Diesel-backed storage over a local SQLite file
//! - [`memory`]: thread-safe in-memory storage for tests

pub mod memory;
pub mod sqlite;
