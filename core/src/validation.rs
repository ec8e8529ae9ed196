//! Title validation.
//!
//! Validation returns every violation as a human-readable message instead of
//! stopping at the first one, so clients can show them all at once.

use crate::todo::TodoPatch;

/// Maximum title length in characters, measured before trimming
pub const MAX_TITLE_LENGTH: usize = 100;

/// Message reported for a missing or blank title
pub const TITLE_REQUIRED: &str = "Title is required";

/// Message reported for a title longer than [`MAX_TITLE_LENGTH`]
pub const TITLE_TOO_LONG: &str = "Title must be less than 100 characters";

/// Validates a candidate title.
///
/// Returns an empty list when the title is valid. Both checks run
/// independently, so a title can produce both messages.
///
/// # Example
///
/// ```
/// use todo_master_core::validate_title;
///
/// assert!(validate_title(Some("Buy milk")).is_empty());
/// assert_eq!(validate_title(Some("   ")), vec!["Title is required"]);
/// assert_eq!(validate_title(None), vec!["Title is required"]);
/// ```
#[must_use]
pub fn validate_title(title: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();

    if title.is_none_or(|t| t.trim().is_empty()) {
        errors.push(TITLE_REQUIRED.to_string());
    }

    if title.is_some_and(|t| t.chars().count() > MAX_TITLE_LENGTH) {
        errors.push(TITLE_TOO_LONG.to_string());
    }

    errors
}

/// Validates the fields of a patch that carry invariants.
///
/// Only a present `title` is checked; a patch without a title is always valid.
#[must_use]
pub fn validate_patch(patch: &TodoPatch) -> Vec<String> {
    match patch.title.as_deref() {
        Some(title) => validate_title(Some(title)),
        None => Vec::new(),
    }
}
