//! HTTP surface for the task schema.

use super::TaskSchema;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{Router, response::Html, routing::get};
use std::io;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Path serving GraphQL requests.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Builds the router: GraphiQL at `/`, the schema at [`GRAPHQL_PATH`], and
/// a liveness probe at `/health`.
pub fn build_router(schema: TaskSchema) -> Router {
    Router::new()
        .route("/", get(graphiql))
        .route_service(GRAPHQL_PATH, GraphQL::new(schema))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

/// Serves the schema on `listener` until Ctrl-C.
///
/// # Errors
///
/// Returns an error when the listener fails.
pub async fn serve(listener: TcpListener, schema: TaskSchema) -> io::Result<()> {
    axum::serve(listener, build_router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
