//! Router configuration.

use crate::handlers::{create_todo, delete_todo, health_check, list_todos, update_todo};
use crate::middleware::trace_requests;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes for the todo collection, relative to their mount point.
fn todo_routes() -> Router<AppState> {
    Router::new().route(
        "/todos",
        get(list_todos)
            .post(create_todo)
            .put(update_todo)
            .delete(delete_todo),
    )
}

/// Build the complete Axum router.
///
/// # Routes
///
/// - `GET /health` - Liveness check
/// - `GET|POST|PUT|DELETE /todos` - Todo collection
/// - `GET|POST|PUT|DELETE /api/todos` - Same collection under the `/api` prefix
///
/// Every response carries an `x-request-id` header.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(todo_routes())
        .nest("/api", todo_routes());

    trace_requests(router).with_state(state)
}
