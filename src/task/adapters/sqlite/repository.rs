//! SQLite repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    pool::TaskSqlitePool,
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskFilter, TaskId, TaskPriority, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;

/// SQLite-backed task repository.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: TaskSqlitePool,
}

impl SqliteTaskRepository {
    /// Creates a new repository from a SQLite connection pool.
    #[must_use]
    pub const fn new(pool: TaskSqlitePool) -> Self {
        Self { pool }
    }

    /// Runs `f` on a pooled connection on the blocking thread pool.
    ///
    /// The connection goes back to the pool when `f` returns, whatever the
    /// outcome.
    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;

            load_task(connection, task_id)?.ok_or(TaskRepositoryError::NotFound(task_id))
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let key = task_id.to_string();
            let affected = diesel::update(tasks::table.find(key.as_str()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }

            load_task(connection, task_id)?.ok_or(TaskRepositoryError::NotFound(task_id))
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| load_task(connection, id))
            .await
    }

    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let key = id.to_string();
            diesel::select(diesel::dsl::exists(tasks::table.find(key.as_str())))
                .get_result::<bool>(connection)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let pattern = filter.search().map(contains_pattern);

        self.run_blocking(move |connection| {
            let mut query = tasks::table.select(TaskRow::as_select()).into_boxed();
            if let Some(title_pattern) = pattern {
                query = query.filter(tasks::title.like(title_pattern).escape('\\'));
            }
            let rows = query
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let key = id.to_string();
            let removed = connection
                .transaction::<_, DieselError, _>(|conn| {
                    let existing = tasks::table
                        .find(key.as_str())
                        .select(TaskRow::as_select())
                        .first::<TaskRow>(conn)
                        .optional()?;
                    if existing.is_some() {
                        diesel::delete(tasks::table.find(key.as_str())).execute(conn)?;
                    }
                    Ok(existing)
                })
                .map_err(TaskRepositoryError::persistence)?;
            removed.map(row_to_task).transpose()
        })
        .await
    }
}

/// Builds a `LIKE` pattern matching `search` anywhere in the value.
///
/// SQLite's `LIKE` folds ASCII case only. Wildcards in `search` are escaped
/// so they match literally.
fn contains_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for ch in search.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn load_task(connection: &mut SqliteConnection, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
    let key = id.to_string();
    let row = tasks::table
        .find(key.as_str())
        .select(TaskRow::as_select())
        .first::<TaskRow>(connection)
        .optional()
        .map_err(TaskRepositoryError::persistence)?;
    row.map(row_to_task).transpose()
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().to_string(),
        title: task.title().as_str().to_owned(),
        completed: task.is_completed(),
        created_at: task.created_at().naive_utc(),
        updated_at: task.updated_at().naive_utc(),
        deadline: task.deadline().map(|deadline| deadline.naive_utc()),
        priority: task.priority().value(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().as_str().to_owned(),
        completed: task.is_completed(),
        updated_at: task.updated_at().naive_utc(),
        deadline: task.deadline().map(|deadline| deadline.naive_utc()),
        priority: task.priority().value(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        completed,
        created_at,
        updated_at,
        deadline,
        priority,
    } = row;

    let data = PersistedTaskData {
        id: id.parse::<TaskId>().map_err(TaskRepositoryError::persistence)?,
        title: TaskTitle::from_persisted(title),
        completed,
        created_at: created_at.and_utc(),
        updated_at: updated_at.and_utc(),
        deadline: deadline.map(|value| value.and_utc()),
        priority: TaskPriority::new(priority),
    };
    Ok(Task::from_persisted(data))
}
