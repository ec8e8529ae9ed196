//! Error types for web handlers.
//!
//! [`ApiError`] bridges domain errors and HTTP responses. It renders as the
//! same [`ApiResponse`] envelope as successful responses, so clients only
//! ever see `{success: false, error | errors}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use todo_master_core::{ApiResponse, TodoError};

/// Message returned for a missing `id`
pub const ID_REQUIRED: &str = "Todo ID is required";

/// Message returned when no todo matches the requested id
pub const NOT_FOUND: &str = "Todo not found";

/// Message returned for a body that is not the expected JSON
pub const INVALID_REQUEST: &str = "Invalid request body";

/// Message returned for a query string that cannot be decoded
pub const INVALID_QUERY: &str = "Invalid query string";

/// Application error type for web handlers.
///
/// Implements Axum's `IntoResponse`. Server errors are logged together with
/// their internal source; the source is never sent to the client.
///
/// # Examples
///
/// ```ignore
/// async fn handler(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Todo>>>, ApiError> {
///     let todos = state.todos.list().await
///         .map_err(|e| ApiError::from_todo_error(e, "Failed to fetch todos"))?;
///     Ok(Json(ApiResponse::data(todos)))
/// }
/// ```
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code
    status: StatusCode,
    /// Envelope sent to the client
    body: ApiResponse<()>,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl ApiError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, body: ApiResponse<()>) -> Self {
        Self {
            status,
            body,
            source: None,
        }
    }

    /// Create a new error with a source error.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 400 Bad Request error with a single message.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiResponse::failure(message))
    }

    /// Create a 400 Bad Request error listing validation failures.
    #[must_use]
    pub const fn validation(errors: Vec<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiResponse::invalid(errors))
    }

    /// Create a 404 Not Found error.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiResponse::failure(NOT_FOUND))
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponse::failure(message),
        )
    }

    /// Map a service error onto an HTTP error.
    ///
    /// `internal_message` is what the client sees if the failure is internal;
    /// each operation supplies its own.
    #[must_use]
    pub fn from_todo_error(err: TodoError, internal_message: &str) -> Self {
        match err {
            TodoError::Validation(errors) => Self::validation(errors),
            TodoError::MissingId => Self::bad_request(ID_REQUIRED),
            TodoError::NotFound => Self::not_found(),
            TodoError::Repository(source) => {
                Self::internal(internal_message).with_source(source.into())
            }
        }
    }

    /// HTTP status this error renders with
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.body.first_error().unwrap_or("unknown error");
        write!(f, "[{}] {message}", self.status.as_u16())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            let client_message = self.body.first_error().unwrap_or_default();
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    client_message,
                    error = %source,
                    "Internal server error"
                );
            } else {
                tracing::error!(status = %self.status, client_message, "Internal server error");
            }
        }

        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_master_core::RepositoryError;

    #[test]
    fn test_error_display() {
        let err = ApiError::bad_request(ID_REQUIRED);
        assert_eq!(err.to_string(), "[400] Todo ID is required");
    }

    #[test]
    fn test_not_found() {
        let err = ApiError::not_found();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body.error.as_deref(), Some(NOT_FOUND));
    }

    #[test]
    fn test_validation_lists_errors() {
        let err = ApiError::validation(vec!["Title is required".to_string()]);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body.errors, Some(vec!["Title is required".to_string()]));
        assert_eq!(err.body.error, None);
    }

    #[test]
    fn test_repository_error_hides_detail() {
        let err = ApiError::from_todo_error(
            TodoError::Repository(RepositoryError::Unavailable("lock poisoned".to_string())),
            "Failed to fetch todos",
        );

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.error.as_deref(), Some("Failed to fetch todos"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_id_maps_to_bad_request() {
        let err = ApiError::from_todo_error(TodoError::MissingId, "Failed to delete todo");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error.as_deref(), Some(ID_REQUIRED));
    }
}
