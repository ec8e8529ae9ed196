//! The JSON response envelope shared by the server and its clients.
//!
//! Every API response, successful or not, is wrapped in an [`ApiResponse`]:
//!
//! ```json
//! {"success": true, "data": {"id": "1", "title": "Buy milk", "completed": false, "createdAt": "..."}}
//! {"success": true, "message": "Todo deleted"}
//! {"success": false, "error": "Todo not found"}
//! {"success": false, "errors": ["Title is required"]}
//! ```
//!
//! Absent fields are omitted from the serialized form.

use serde::{Deserialize, Serialize};

/// Uniform response wrapper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload of a successful operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Confirmation message for operations without a payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Single failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Validation failures, one per violation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`
    #[must_use]
    pub const fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            errors: None,
        }
    }

    /// Successful response carrying only a message
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
            errors: None,
        }
    }

    /// Failed response with a single error message
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            errors: None,
        }
    }

    /// Failed response listing validation errors
    #[must_use]
    pub const fn invalid(errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: None,
            errors: Some(errors),
        }
    }

    /// The most relevant failure message, if any.
    ///
    /// Prefers the first validation error, then the single error message.
    #[must_use]
    pub fn first_error(&self) -> Option<&str> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.first())
            .or(self.error.as_ref())
            .map(String::as_str)
    }
}
