//! Access to the todo API from the client side.
//!
//! [`TodoApi`] is the seam the list state talks through. [`HttpTodoClient`]
//! implements it over HTTP; tests substitute an in-process fake.

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;
use todo_master_core::{ApiResponse, Todo, TodoId, TodoPatch};

/// Default base URL of the API, including the `/api` prefix
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/api";

/// Errors returned by a [`TodoApi`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a failure envelope or a non-success status
    #[error("API rejected request (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        /// HTTP status code
        status: u16,
        /// First error reported by the server, if the body carried one
        message: Option<String>,
    },

    /// The response body was not the expected envelope
    #[error("Response parsing failed: {0}")]
    Decode(String),
}

/// Future returned by [`TodoApi`] operations.
pub type ClientFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ClientError>> + Send + 'a>>;

/// Operations the todo list performs against the server.
///
/// Dyn-compatible so callers can hold a `Box<dyn TodoApi>`.
pub trait TodoApi: Send + Sync {
    /// Fetch every todo.
    fn list(&self) -> ClientFuture<'_, Vec<Todo>>;

    /// Create a todo. The title is sent as typed; the server trims it.
    fn create(&self, title: String) -> ClientFuture<'_, Todo>;

    /// Merge `patch` into the todo with `id`.
    fn update(&self, id: TodoId, patch: TodoPatch) -> ClientFuture<'_, Todo>;

    /// Delete the todo with `id`.
    fn delete(&self, id: TodoId) -> ClientFuture<'_, ()>;
}

impl<T: TodoApi + ?Sized> TodoApi for Box<T> {
    fn list(&self) -> ClientFuture<'_, Vec<Todo>> {
        (**self).list()
    }

    fn create(&self, title: String) -> ClientFuture<'_, Todo> {
        (**self).create(title)
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> ClientFuture<'_, Todo> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: TodoId) -> ClientFuture<'_, ()> {
        (**self).delete(id)
    }
}

/// [`TodoApi`] over HTTP with JSON envelopes.
#[derive(Clone, Debug)]
pub struct HttpTodoClient {
    client: Client,
    api_url: String,
}

impl HttpTodoClient {
    /// Create a client for the API rooted at `api_url` (e.g. `http://host:3000/api`).
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_url)
    }

    /// Create a client reusing an existing `reqwest` client.
    #[must_use]
    pub fn with_client(client: Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Create a client from `TODO_API_URL`, falling back to [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let api_url = std::env::var("TODO_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(api_url)
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.api_url)
    }

    async fn request<B, T>(&self, method: Method, body: Option<&B>) -> Result<T, ClientError>
    where
        B: serde::Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.client.request(method, self.todos_url());
        if let Some(body) = body {
            request = request.json(body);
        }

        let envelope = decode_envelope::<T>(send(request).await?).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::Decode("Envelope has no data".to_string()))
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<Response, ClientError> {
    request
        .send()
        .await
        .map_err(|e| ClientError::Transport(e.to_string()))
}

/// Read a response into an envelope, turning failures into [`ClientError::Rejected`].
async fn decode_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiResponse<T>, ClientError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ClientError::Transport(e.to_string()))?;

    if !status.is_success() {
        // Error bodies may not be envelopes (e.g. a proxy's HTML page)
        let message = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&bytes)
            .ok()
            .and_then(|envelope| envelope.first_error().map(str::to_string));
        tracing::debug!(status = status.as_u16(), ?message, "API rejected request");
        return Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: ApiResponse<T> = serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::Decode(e.to_string()))?;

    if !envelope.success {
        return Err(ClientError::Rejected {
            status: status.as_u16(),
            message: envelope.first_error().map(str::to_string),
        });
    }

    Ok(envelope)
}

#[derive(serde::Serialize)]
struct CreateBody<'a> {
    title: &'a str,
}

#[derive(serde::Serialize)]
struct UpdateBody<'a> {
    id: &'a TodoId,
    #[serde(flatten)]
    patch: &'a TodoPatch,
}

impl TodoApi for HttpTodoClient {
    fn list(&self) -> ClientFuture<'_, Vec<Todo>> {
        Box::pin(async move {
            self.request::<(), _>(Method::GET, None).await
        })
    }

    fn create(&self, title: String) -> ClientFuture<'_, Todo> {
        Box::pin(async move {
            self.request(Method::POST, Some(&CreateBody { title: &title }))
                .await
        })
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> ClientFuture<'_, Todo> {
        Box::pin(async move {
            self.request(
                Method::PUT,
                Some(&UpdateBody {
                    id: &id,
                    patch: &patch,
                }),
            )
            .await
        })
    }

    fn delete(&self, id: TodoId) -> ClientFuture<'_, ()> {
        Box::pin(async move {
            let request = self
                .client
                .delete(self.todos_url())
                .query(&[("id", id.as_str())]);
            let response = send(request).await?;
            decode_envelope::<serde_json::Value>(response).await?;
            Ok(())
        })
    }
}
