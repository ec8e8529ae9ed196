//! Todo operations: validation followed by storage.
//!
//! Each [`TodoService`] method is a single-shot transaction. Inputs arrive
//! loosely typed (`Option<&str>`) because they come straight from request
//! bodies and query strings; the service decides what counts as missing.

use crate::environment::TodoEnvironment;
use crate::repository::{RepositoryError, TodoRepository};
use crate::todo::{Todo, TodoId, TodoPatch};
use crate::validation::{validate_patch, validate_title};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by [`TodoService`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The request failed validation; one message per violation.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// No id was supplied, or it was empty.
    #[error("Todo ID is required")]
    MissingId,

    /// No todo has the requested id.
    #[error("Todo not found")]
    NotFound,

    /// The storage collaborator failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Todo operations over an injected repository and environment.
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
    environment: TodoEnvironment,
}

impl TodoService {
    /// Creates a new `TodoService`
    #[must_use]
    pub fn new(repository: Arc<dyn TodoRepository>, environment: TodoEnvironment) -> Self {
        Self {
            repository,
            environment,
        }
    }

    /// Returns every todo in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Repository`] if storage fails.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let todos = self.repository.get_all().await?;
        tracing::debug!(count = todos.len(), "Listed todos");
        Ok(todos)
    }

    /// Returns the todo with the given id.
    ///
    /// # Errors
    ///
    /// - [`TodoError::NotFound`] if no todo has that id
    /// - [`TodoError::Repository`] if storage fails
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: &TodoId) -> Result<Todo, TodoError> {
        self.repository
            .get_by_id(id.clone())
            .await?
            .ok_or(TodoError::NotFound)
    }

    /// Validates `title`, builds a new todo, and stores it.
    ///
    /// # Errors
    ///
    /// - [`TodoError::Validation`] if the title is missing, blank, or too long
    /// - [`TodoError::Repository`] if storage fails
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, title: Option<&str>) -> Result<Todo, TodoError> {
        let errors = validate_title(title);
        let Some(title) = title.filter(|_| errors.is_empty()) else {
            tracing::warn!(?errors, "Rejected todo creation");
            return Err(TodoError::Validation(errors));
        };

        let todo = self.environment.create_todo(title);
        let created = self.repository.create(todo).await?;

        tracing::info!(id = %created.id, "Created todo");
        Ok(created)
    }

    /// Merges `patch` over the todo with the given id.
    ///
    /// A replacement title is validated like a new one and stored trimmed.
    ///
    /// # Errors
    ///
    /// - [`TodoError::MissingId`] if `id` is absent or empty
    /// - [`TodoError::Validation`] if the replacement title is invalid
    /// - [`TodoError::NotFound`] if no todo has that id
    /// - [`TodoError::Repository`] if storage fails
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: Option<&str>, patch: TodoPatch) -> Result<Todo, TodoError> {
        let id = require_id(id)?;

        let errors = validate_patch(&patch);
        if !errors.is_empty() {
            tracing::warn!(%id, ?errors, "Rejected todo update");
            return Err(TodoError::Validation(errors));
        }

        let patch = TodoPatch {
            title: patch.title.map(|title| title.trim().to_string()),
            ..patch
        };

        let Some(updated) = self.repository.update(id.clone(), patch).await? else {
            tracing::warn!(%id, "Todo not found for update");
            return Err(TodoError::NotFound);
        };

        tracing::info!(%id, completed = updated.completed, "Updated todo");
        Ok(updated)
    }

    /// Removes the todo with the given id.
    ///
    /// # Errors
    ///
    /// - [`TodoError::MissingId`] if `id` is absent or empty
    /// - [`TodoError::NotFound`] if no todo has that id
    /// - [`TodoError::Repository`] if storage fails
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: Option<&str>) -> Result<(), TodoError> {
        let id = require_id(id)?;

        if !self.repository.delete(id.clone()).await? {
            tracing::warn!(%id, "Todo not found for delete");
            return Err(TodoError::NotFound);
        }

        tracing::info!(%id, "Deleted todo");
        Ok(())
    }
}

impl std::fmt::Debug for TodoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoService")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

fn require_id(id: Option<&str>) -> Result<TodoId, TodoError> {
    id.filter(|id| !id.is_empty())
        .map(TodoId::from)
        .ok_or(TodoError::MissingId)
}
