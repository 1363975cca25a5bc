//! Pool opening and on-disk persistence tests.

use crate::sqlite::helpers::{SqliteContext, new_task, sqlite_context};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use rstest::rstest;
use std::time::Duration;
use taskql::task::{
    adapters::sqlite::{SqliteStorageConfig, StorageError, open_pool},
    domain::TaskFilter,
    ports::TaskRepository,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_survive_reopening_the_database(sqlite_context: SqliteContext) {
    let task = new_task("Persisted");
    sqlite_context
        .repository
        .store(&task)
        .await
        .expect("store task");

    let reopened = sqlite_context.reopen();
    let found = reopened.find_by_id(task.id()).await.expect("find task");

    assert_eq!(found, Some(task));
}

#[rstest]
fn schema_bootstrap_is_idempotent(sqlite_context: SqliteContext) {
    let config = SqliteStorageConfig::new(sqlite_context.database_path());
    open_pool(&config).expect("first reopen");
    open_pool(&config).expect("second reopen");
}

#[rstest]
fn open_pool_reports_unreachable_database() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let config = SqliteStorageConfig::new(dir.path().join("missing").join("tasks.db"))
        .with_connection_timeout(Duration::from_millis(200));

    let result = open_pool(&config);

    assert!(matches!(result, Err(StorageError::Pool { .. })));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_writers_share_one_file(sqlite_context: SqliteContext) {
    let repository = sqlite_context.repository.clone();
    let writers = (0..8).map(|index| {
        let repo = repository.clone();
        tokio::spawn(async move { repo.store(&new_task(&format!("writer {index}"))).await })
    });

    for writer in writers.collect::<Vec<_>>() {
        writer
            .await
            .expect("writer task joins")
            .expect("store succeeds");
    }

    let all = repository
        .list(&taskql::task::domain::TaskFilter::all())
        .await
        .expect("list tasks");
    assert_eq!(all.len(), 8);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rows_with_blank_titles_are_still_listed(sqlite_context: SqliteContext) {
    let path = sqlite_context.database_path();
    let url = path.to_str().expect("utf-8 database path");
    let mut connection = SqliteConnection::establish(url).expect("open raw connection");
    diesel::sql_query(
        "INSERT INTO tasks (id, title, completed, created_at, updated_at, deadline, priority) \
         VALUES ('5f0c6a52-3a4e-4c2a-9b1e-0d6f4b8a7c11', '', 0, \
         '2024-05-01 09:00:00', '2024-05-01 09:00:00', NULL, 5)",
    )
    .execute(&mut connection)
    .expect("insert legacy row");
    sqlite_context
        .repository
        .store(&new_task("Current"))
        .await
        .expect("store task");

    let tasks = sqlite_context
        .repository
        .list(&TaskFilter::all())
        .await
        .expect("list tasks");

    let mut titles: Vec<&str> = tasks.iter().map(|task| task.title().as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, ["", "Current"]);
}
