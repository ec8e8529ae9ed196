//! # Todo Master Testing
//!
//! Testing utilities and helpers for Todo Master.
//!
//! This crate provides:
//! - Deterministic implementations of the environment traits
//! - A repository that always fails, for exercising internal-error paths
//! - Fixtures for building services and records
//!
//! ## Example
//!
//! ```
//! use todo_master_testing::test_service;
//!
//! # async fn example() -> Result<(), todo_master_core::TodoError> {
//! let (service, repo) = test_service();
//!
//! let todo = service.create(Some("Buy milk")).await?;
//! assert_eq!(todo.id.as_str(), "1");
//! assert_eq!(repo.len(), 1);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use todo_master_core::TodoId;
use todo_master_core::environment::{Clock, IdGenerator};

/// Mock implementations of Environment traits and storage
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, TodoId, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};
    use todo_master_core::repository::{RepositoryError, RepositoryFuture, TodoRepository};
    use todo_master_core::{Todo, TodoPatch};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use todo_master_testing::mocks::FixedClock;
    /// use todo_master_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Predictable ids: `"1"`, `"2"`, `"3"`, ...
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Generator whose first id is `"1"`
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(1)
        }

        /// Generator whose first id is `start`
        #[must_use]
        pub const fn starting_at(start: u64) -> Self {
            Self {
                next: AtomicU64::new(start),
            }
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> TodoId {
            TodoId::new(self.next.fetch_add(1, Ordering::Relaxed).to_string())
        }
    }

    /// Repository whose every operation fails with [`RepositoryError::Unavailable`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FailingTodoRepository;

    impl FailingTodoRepository {
        fn fail<T: Send + 'static>(operation: &str) -> RepositoryFuture<'static, T> {
            let error = RepositoryError::Unavailable(format!("{operation} failed"));
            Box::pin(async move { Err(error) })
        }
    }

    impl TodoRepository for FailingTodoRepository {
        fn get_all(&self) -> RepositoryFuture<'_, Vec<Todo>> {
            Self::fail("get_all")
        }

        fn get_by_id(&self, _id: TodoId) -> RepositoryFuture<'_, Option<Todo>> {
            Self::fail("get_by_id")
        }

        fn create(&self, _todo: Todo) -> RepositoryFuture<'_, Todo> {
            Self::fail("create")
        }

        fn update(&self, _id: TodoId, _patch: TodoPatch) -> RepositoryFuture<'_, Option<Todo>> {
            Self::fail("update")
        }

        fn delete(&self, _id: TodoId) -> RepositoryFuture<'_, bool> {
            Self::fail("delete")
        }
    }
}

/// Fixtures for services and records
pub mod helpers {
    use super::mocks::{SequentialIdGenerator, test_clock};
    use super::{Clock, TodoId};
    use std::sync::Arc;
    use todo_master_core::{InMemoryTodoRepository, Todo, TodoEnvironment, TodoService};

    /// Environment with the fixed test clock and sequential ids starting at `"1"`
    #[must_use]
    pub fn test_environment() -> TodoEnvironment {
        TodoEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(SequentialIdGenerator::new()),
        )
    }

    /// Service over an empty in-memory repository, plus a handle to that repository
    #[must_use]
    pub fn test_service() -> (TodoService, InMemoryTodoRepository) {
        let repo = InMemoryTodoRepository::new();
        let service = TodoService::new(Arc::new(repo.clone()), test_environment());
        (service, repo)
    }

    /// A not-yet-completed todo stamped with the test clock
    #[must_use]
    pub fn todo(id: &str, title: &str) -> Todo {
        Todo::new(TodoId::new(id), title.to_string(), test_clock().now())
    }

    /// A completed todo stamped with the test clock
    #[must_use]
    pub fn completed_todo(id: &str, title: &str) -> Todo {
        Todo {
            completed: true,
            ..todo(id, title)
        }
    }
}

// Re-export commonly used items
pub use helpers::{completed_todo, test_environment, test_service, todo};
pub use mocks::{FailingTodoRepository, FixedClock, SequentialIdGenerator, test_clock};
