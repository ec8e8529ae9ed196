//! # Todo Master Core
//!
//! Domain model and storage for the Todo Master task list.
//!
//! This crate contains everything that does not depend on HTTP:
//!
//! - **Envelope**: the [`ApiResponse`] wrapper used by every API response
//! - **Model**: [`Todo`], [`TodoId`], and the mergeable [`TodoPatch`]
//! - **Validation**: title rules shared by create and update
//! - **Environment**: injected [`Clock`](environment::Clock) and
//!   [`IdGenerator`](environment::IdGenerator), plus the construction helper
//! - **Repository**: the storage collaborator trait and its in-memory implementation
//! - **Service**: validation followed by storage, one transaction per call
//!
//! ## Example
//!
//! ```no_run
//! use todo_master_core::{InMemoryTodoRepository, TodoEnvironment, TodoService};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), todo_master_core::TodoError> {
//! let service = TodoService::new(
//!     Arc::new(InMemoryTodoRepository::new()),
//!     TodoEnvironment::production(),
//! );
//!
//! let todo = service.create(Some("Buy milk")).await?;
//! assert!(!todo.completed);
//!
//! let all = service.list().await?;
//! assert_eq!(all.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod envelope;
pub mod environment;
pub mod repository;
pub mod service;
pub mod todo;
pub mod validation;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use envelope::ApiResponse;
pub use environment::{Clock, IdGenerator, SystemClock, TodoEnvironment, UuidIdGenerator};
pub use repository::{InMemoryTodoRepository, RepositoryError, TodoRepository};
pub use service::{TodoError, TodoService};
pub use todo::{Todo, TodoId, TodoPatch};
pub use validation::{MAX_TITLE_LENGTH, validate_patch, validate_title};
