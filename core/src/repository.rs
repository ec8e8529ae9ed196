//! Storage collaborator for todo records.
//!
//! The [`TodoRepository`] trait is the seam between request handling and
//! storage. [`InMemoryTodoRepository`] is the only production implementation:
//! an ordered `Vec` behind an `RwLock`, reset whenever the process restarts.
//!
//! # Ordering
//!
//! Records are kept in insertion order. `get_all` returns them in that order;
//! lookups are linear scans.
//!
//! # Concurrency
//!
//! Each repository call takes the lock exactly once, so mutations never
//! interleave even when handlers run on several worker threads.

use crate::todo::{Todo, TodoId, TodoPatch};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A record with the same id is already stored.
    #[error("Todo with id {0} already exists")]
    DuplicateId(TodoId),

    /// The storage backend cannot serve requests.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(_: PoisonError<T>) -> Self {
        Self::Unavailable("todo list lock poisoned".to_string())
    }
}

/// Result type for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Boxed future returned by repository methods
pub type RepositoryFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Storage for todo records.
///
/// # Dyn Compatibility
///
/// Methods return boxed futures instead of using `async fn` so the repository
/// can be shared as `Arc<dyn TodoRepository>`.
pub trait TodoRepository: Send + Sync {
    /// Returns a copy of every stored record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if storage cannot be read.
    fn get_all(&self) -> RepositoryFuture<'_, Vec<Todo>>;

    /// Returns the record with the given id, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if storage cannot be read.
    fn get_by_id(&self, id: TodoId) -> RepositoryFuture<'_, Option<Todo>>;

    /// Appends a record and returns the stored copy.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::DuplicateId`] if the id is already in use
    /// - [`RepositoryError::Unavailable`] if storage cannot be written
    fn create(&self, todo: Todo) -> RepositoryFuture<'_, Todo>;

    /// Merges `patch` over the record with the given id.
    ///
    /// Returns `None` when no record has that id; storage is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if storage cannot be written.
    fn update(&self, id: TodoId, patch: TodoPatch) -> RepositoryFuture<'_, Option<Todo>>;

    /// Removes the record with the given id.
    ///
    /// Returns `false` when no record has that id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if storage cannot be written.
    fn delete(&self, id: TodoId) -> RepositoryFuture<'_, bool>;
}

/// In-memory, insertion-ordered todo storage.
///
/// Cloning is cheap and clones share the same underlying list.
///
/// # Example
///
/// ```
/// use todo_master_core::{InMemoryTodoRepository, TodoEnvironment, TodoRepository};
///
/// # async fn example() -> Result<(), todo_master_core::RepositoryError> {
/// let repo = InMemoryTodoRepository::new();
/// let todo = TodoEnvironment::production().create_todo("Buy milk");
///
/// repo.create(todo.clone()).await?;
/// assert_eq!(repo.get_by_id(todo.id.clone()).await?, Some(todo));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    /// Create a new empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `todos`, kept in the given order
    #[must_use]
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(todos)),
        }
    }

    /// Get the number of stored todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the repository is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn get_all(&self) -> RepositoryFuture<'_, Vec<Todo>> {
        Box::pin(async move { Ok(self.todos.read()?.clone()) })
    }

    fn get_by_id(&self, id: TodoId) -> RepositoryFuture<'_, Option<Todo>> {
        Box::pin(async move {
            let todos = self.todos.read()?;
            Ok(todos.iter().find(|todo| todo.id == id).cloned())
        })
    }

    fn create(&self, todo: Todo) -> RepositoryFuture<'_, Todo> {
        Box::pin(async move {
            let mut todos = self.todos.write()?;
            if todos.iter().any(|existing| existing.id == todo.id) {
                return Err(RepositoryError::DuplicateId(todo.id));
            }
            todos.push(todo.clone());
            Ok(todo)
        })
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> RepositoryFuture<'_, Option<Todo>> {
        Box::pin(async move {
            let mut todos = self.todos.write()?;
            let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) else {
                return Ok(None);
            };
            todo.apply(patch);
            Ok(Some(todo.clone()))
        })
    }

    fn delete(&self, id: TodoId) -> RepositoryFuture<'_, bool> {
        Box::pin(async move {
            let mut todos = self.todos.write()?;
            let Some(index) = todos.iter().position(|todo| todo.id == id) else {
                return Ok(false);
            };
            todos.remove(index);
            Ok(true)
        })
    }
}
