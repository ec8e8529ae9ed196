//! Application state for Axum handlers.

use crate::config::Config;
use std::sync::Arc;
use todo_master_core::{InMemoryTodoRepository, TodoEnvironment, TodoService};

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; the service inside shares one repository.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Todo operations
    pub todos: TodoService,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub const fn new(todos: TodoService) -> Self {
        Self { todos }
    }

    /// Build production state: an in-memory repository, optionally seeded
    /// with the demo todos, and the production environment.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let environment = TodoEnvironment::production();
        let repository = if config.storage.seed_demo {
            InMemoryTodoRepository::with_todos(environment.seed_todos())
        } else {
            InMemoryTodoRepository::new()
        };

        tracing::debug!(seeded = repository.len(), "Initialized todo storage");
        Self::new(TodoService::new(Arc::new(repository), environment))
    }
}
