//! Query and mutation roots of the task GraphQL schema.

use super::TaskView;
use crate::task::{
    domain::{TaskId, TaskPriority},
    ports::TaskRepository,
    services::{AddTaskRequest, TaskMutationService, TaskQueryService, UpdateTaskRequest},
};
use async_graphql::{Context, EmptySubscription, MaybeUndefined, Object, Result, Schema};
use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use std::sync::Arc;
use uuid::Uuid;

/// Executable task schema.
pub type TaskSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Query service as stored in the schema context.
pub type ApiQueryService = TaskQueryService<dyn TaskRepository>;

/// Mutation service as stored in the schema context.
pub type ApiMutationService = TaskMutationService<dyn TaskRepository, DefaultClock>;

/// Builds the schema around the given services.
#[must_use]
pub fn build_schema(queries: ApiQueryService, mutations: ApiMutationService) -> TaskSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(queries)
        .data(mutations)
        .finish()
}

/// Builds the schema with both services backed by `repository` and the
/// system clock.
#[must_use]
pub fn schema_for_repository(repository: Arc<dyn TaskRepository>) -> TaskSchema {
    let queries = TaskQueryService::new(Arc::clone(&repository));
    let mutations = TaskMutationService::new(repository, Arc::new(DefaultClock));
    build_schema(queries, mutations)
}

/// Read-only task queries.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Returns all tasks. When `search` is given, only tasks whose title
    /// contains it (ignoring case) are returned.
    async fn tasks(&self, ctx: &Context<'_>, search: Option<String>) -> Result<Vec<TaskView>> {
        let service = ctx.data::<ApiQueryService>()?;
        let tasks = service.list_tasks(search).await?;
        Ok(tasks.into_iter().map(TaskView::from).collect())
    }

    /// Returns a single task by its ID, or null if not found.
    async fn task(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<TaskView>> {
        let service = ctx.data::<ApiQueryService>()?;
        let task = service.get_task(TaskId::from_uuid(id)).await?;
        Ok(task.map(TaskView::from))
    }
}

/// Task mutations.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a new, incomplete task with a fresh ID and timestamps.
    async fn add_task(
        &self,
        ctx: &Context<'_>,
        title: String,
        deadline: Option<DateTime<Utc>>,
        #[graphql(default_with = "TaskPriority::DEFAULT.value()")] priority: i32,
    ) -> Result<TaskView> {
        let service = ctx.data::<ApiMutationService>()?;
        let mut request = AddTaskRequest::new(title).with_priority(priority);
        if let Some(value) = deadline {
            request = request.with_deadline(value);
        }
        let task = service.add_task(request).await?;
        Ok(TaskView::from(task))
    }

    /// Marks a task as completed and refreshes `updatedAt`. Returns null if
    /// not found.
    async fn toggle_task(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<TaskView>> {
        let service = ctx.data::<ApiMutationService>()?;
        let task = service.toggle_task(TaskId::from_uuid(id)).await?;
        Ok(task.map(TaskView::from))
    }

    /// Deletes a task and returns it as it was, or null if not found.
    async fn delete_task(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<TaskView>> {
        let service = ctx.data::<ApiMutationService>()?;
        let task = service.delete_task(TaskId::from_uuid(id)).await?;
        Ok(task.map(TaskView::from))
    }

    /// Overwrites the given fields of a task. Omitted and null arguments
    /// leave the field unchanged. Returns null if not found.
    async fn update_task(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        title: MaybeUndefined<String>,
        deadline: MaybeUndefined<DateTime<Utc>>,
        priority: MaybeUndefined<i32>,
    ) -> Result<Option<TaskView>> {
        let service = ctx.data::<ApiMutationService>()?;
        let mut request = UpdateTaskRequest::new();
        if let MaybeUndefined::Value(value) = title {
            request = request.with_title(value);
        }
        if let MaybeUndefined::Value(value) = deadline {
            request = request.with_deadline(value);
        }
        if let MaybeUndefined::Value(value) = priority {
            request = request.with_priority(value);
        }
        let task = service
            .update_task(TaskId::from_uuid(id), request)
            .await?;
        Ok(task.map(TaskView::from))
    }
}
