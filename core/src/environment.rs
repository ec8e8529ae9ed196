//! Environment module - Dependency injection traits
//!
//! Time and identifier generation are abstracted behind traits so that record
//! construction is deterministic under test. Production implementations live
//! here; fixed and sequential test doubles live in `todo-master-testing`.

use crate::todo::{Todo, TodoId};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Clock trait - abstracts time operations for testability
///
/// # Examples
///
/// ```
/// use todo_master_core::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let before = clock.now();
/// assert!(clock.now() >= before);
/// ```
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Identifier generator for new records.
///
/// Implementations must not repeat an identifier within a process lifetime.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh identifier
    fn next_id(&self) -> TodoId;
}

/// Random UUID v4 identifiers rendered as 32 lowercase hex digits
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> TodoId {
        TodoId::new(Uuid::new_v4().simple().to_string())
    }
}

/// Environment dependencies for building todo records
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of new identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Environment backed by the system clock and UUID identifiers
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(UuidIdGenerator))
    }

    /// Builds a new todo from a title.
    ///
    /// The title is trimmed and the record starts out not completed. This does
    /// not validate the title or touch storage.
    #[must_use]
    pub fn create_todo(&self, title: &str) -> Todo {
        let title = title.trim().to_string();
        Todo::new(self.ids.next_id(), title, self.clock.now())
    }

    /// The two demo records seeded into a fresh server.
    ///
    /// Seeded records use the fixed ids `"1"` and `"2"`.
    #[must_use]
    pub fn seed_todos(&self) -> Vec<Todo> {
        let now = self.clock.now();
        vec![
            Todo::new(TodoId::new("1"), "Learn the MVC pattern".to_string(), now),
            Todo::new(TodoId::new("2"), "Deploy to production".to_string(), now),
        ]
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}
