//! Domain types for a todo list.
//!
//! A todo list is an ordered collection of [`Todo`] records. Records are created
//! with a generated [`TodoId`], mutated only through a [`TodoPatch`], and removed
//! by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a todo item.
///
/// Identifiers are opaque strings. Production ids come from an
/// [`IdGenerator`](crate::environment::IdGenerator); seeded records use short
/// numeric ids such as `"1"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Creates a `TodoId` from any string-like value
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single todo item.
///
/// Serialized with camel-cased keys, matching the JSON API:
///
/// ```json
/// {"id": "1", "title": "Buy milk", "completed": false, "createdAt": "2025-01-01T00:00:00Z"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, immutable after creation
    pub id: TodoId,
    /// Title of the todo, never blank
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// When the todo was created, immutable after creation
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new, not yet completed todo
    #[must_use]
    pub const fn new(id: TodoId, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            completed: false,
            created_at,
        }
    }

    /// Merges the fields named by `patch` over this record.
    ///
    /// Only `title` and `completed` are mergeable; `id` and `created_at` never change.
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Partial update for a [`Todo`].
///
/// Absent fields are left untouched when the patch is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    /// Replacement title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement completion flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that only sets the completion flag
    #[must_use]
    pub const fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }

    /// Patch that only replaces the title
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    /// Returns `true` if the patch names no fields
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}
