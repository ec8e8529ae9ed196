//! Todo collection endpoints.
//!
//! - `GET /todos` - List all todos
//! - `POST /todos` - Create a todo from `{title}`
//! - `PUT /todos` - Merge `{id, title?, completed?}` into an existing todo
//! - `DELETE /todos?id=<id>` - Delete a todo
//!
//! Every response is an [`ApiResponse`] envelope. Bodies are parsed as JSON
//! whatever their `Content-Type`; unparseable ones get a 400 envelope rather
//! than Axum's plain-text rejection.

use crate::error::{ApiError, INVALID_QUERY, INVALID_REQUEST};
use crate::state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use serde::{Deserialize, de::DeserializeOwned};
use todo_master_core::{ApiResponse, Todo, TodoPatch};

// ============================================================================
// Request Types
// ============================================================================

/// Body of `POST /todos`.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Title of the new todo
    pub title: Option<String>,
}

/// Body of `PUT /todos`.
///
/// Fields other than `id`, `title`, and `completed` are ignored, so `createdAt`
/// in the body cannot rewrite a record's creation time.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    /// Todo to update
    pub id: Option<String>,
    /// Fields to merge
    #[serde(flatten)]
    pub patch: TodoPatch,
}

/// Decode a JSON request body.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected unparseable request body");
        ApiError::bad_request(INVALID_REQUEST)
    })
}

/// First value of `key` in a decoded query string.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

// ============================================================================
// Handlers
// ============================================================================

/// List all todos in insertion order.
///
/// # Example
///
/// ```bash
/// curl http://localhost:3000/api/todos
/// # {"success":true,"data":[{"id":"1","title":"Learn the MVC pattern",...}]}
/// ```
///
/// # Errors
///
/// 500 `{success:false, error:"Failed to fetch todos"}` if storage fails.
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Todo>>>, ApiError> {
    let todos = state
        .todos
        .list()
        .await
        .map_err(|e| ApiError::from_todo_error(e, "Failed to fetch todos"))?;

    Ok(Json(ApiResponse::data(todos)))
}

/// Create a todo.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:3000/api/todos \
///   -H 'Content-Type: application/json' \
///   -d '{"title":"Buy milk"}'
/// # 201 {"success":true,"data":{"id":"...","title":"Buy milk","completed":false,...}}
/// ```
///
/// # Errors
///
/// - 400 `{success:false, errors:[...]}` if the title is invalid
/// - 400 `{success:false, error:"Invalid request body"}` if the body is not valid JSON
/// - 500 `{success:false, error:"Failed to create todo"}` if storage fails
pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<Todo>>), ApiError> {
    let request: CreateTodoRequest = parse_body(&body)?;

    let todo = state
        .todos
        .create(request.title.as_deref())
        .await
        .map_err(|e| ApiError::from_todo_error(e, "Failed to create todo"))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(todo))))
}

/// Update a todo by merging the supplied fields.
///
/// # Example
///
/// ```bash
/// curl -X PUT http://localhost:3000/api/todos \
///   -H 'Content-Type: application/json' \
///   -d '{"id":"1","completed":true}'
/// ```
///
/// # Errors
///
/// - 400 `{success:false, error:"Todo ID is required"}` if `id` is missing
/// - 400 `{success:false, errors:[...]}` if a replacement title is invalid
/// - 404 `{success:false, error:"Todo not found"}` if no todo has that id
/// - 500 `{success:false, error:"Failed to update todo"}` if storage fails
pub async fn update_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    let request: UpdateTodoRequest = parse_body(&body)?;

    let todo = state
        .todos
        .update(request.id.as_deref(), request.patch)
        .await
        .map_err(|e| ApiError::from_todo_error(e, "Failed to update todo"))?;

    Ok(Json(ApiResponse::data(todo)))
}

/// Delete a todo by id.
///
/// Only the first `id` parameter is used.
///
/// # Example
///
/// ```bash
/// curl -X DELETE 'http://localhost:3000/api/todos?id=1'
/// # {"success":true,"message":"Todo deleted"}
/// ```
///
/// # Errors
///
/// - 400 `{success:false, error:"Todo ID is required"}` if `id` is missing
/// - 400 `{success:false, error:"Invalid query string"}` if the query cannot be decoded
/// - 404 `{success:false, error:"Todo not found"}` if no todo has that id
/// - 500 `{success:false, error:"Failed to delete todo"}` if storage fails
pub async fn delete_todo(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected unparseable query string");
        ApiError::bad_request(INVALID_QUERY)
    })?;

    state
        .todos
        .delete(first_param(&params, "id"))
        .await
        .map_err(|e| ApiError::from_todo_error(e, "Failed to delete todo"))?;

    Ok(Json(ApiResponse::message("Todo deleted")))
}
