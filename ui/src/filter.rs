//! Filtering, search, and counts over a local todo list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use todo_master_core::Todo;

/// Which todos the list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every todo
    #[default]
    All,
    /// Todos not yet completed
    Active,
    /// Completed todos
    Completed,
}

impl FilterMode {
    /// Returns `true` if `todo` passes this filter.
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter mode: {0} (expected all, active, or completed)")]
pub struct ParseFilterModeError(String);

impl FromStr for FilterMode {
    type Err = ParseFilterModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseFilterModeError(s.to_string())),
        }
    }
}

/// Todos passing `filter` whose title contains `search`, ignoring case.
///
/// An empty search matches every title. Order follows `todos`.
#[must_use]
pub fn visible_todos<'a>(todos: &'a [Todo], filter: FilterMode, search: &str) -> Vec<&'a Todo> {
    let needle = search.to_lowercase();
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .filter(|todo| todo.title.to_lowercase().contains(&needle))
        .collect()
}

/// Summary counts over the full list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TodoCounts {
    /// All todos
    pub total: usize,
    /// Todos not yet completed
    pub active: usize,
    /// Completed todos
    pub completed: usize,
}

impl TodoCounts {
    /// Count `todos`, ignoring any filter or search.
    #[must_use]
    pub fn of(todos: &[Todo]) -> Self {
        let completed = todos.iter().filter(|todo| todo.completed).count();
        Self {
            total: todos.len(),
            active: todos.len() - completed,
            completed,
        }
    }
}
