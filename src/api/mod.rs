//! GraphQL API over the task services.
//!
//! Field and argument names are camelCase on the wire (`addTask`,
//! `createdAt`). A missing task is a `null` payload; storage failures and
//! invalid titles are request errors.

mod schema;
mod server;
mod view;

pub use schema::{
    ApiMutationService, ApiQueryService, MutationRoot, QueryRoot, TaskSchema, build_schema,
    schema_for_repository,
};
pub use server::{GRAPHQL_PATH, build_router, serve};
pub use view::TaskView;
