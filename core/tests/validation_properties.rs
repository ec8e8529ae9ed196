//! Property tests for title validation.

use proptest::prelude::*;
use todo_master_core::validation::{TITLE_REQUIRED, TITLE_TOO_LONG};
use todo_master_core::{MAX_TITLE_LENGTH, validate_title};

proptest! {
    #[test]
    fn non_blank_titles_within_limit_are_valid(title in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,99}") {
        prop_assert!(validate_title(Some(&title)).is_empty());
    }

    #[test]
    fn whitespace_only_titles_are_required(title in "[ \t\n]{0,100}") {
        prop_assert_eq!(validate_title(Some(&title)), vec![TITLE_REQUIRED.to_string()]);
    }

    #[test]
    fn titles_over_limit_report_length(extra in 1usize..50) {
        let title = "x".repeat(MAX_TITLE_LENGTH + extra);
        prop_assert_eq!(validate_title(Some(&title)), vec![TITLE_TOO_LONG.to_string()]);
    }
}

#[test]
fn boundary_is_inclusive_at_one_hundred() {
    assert!(validate_title(Some(&"a".repeat(100))).is_empty());
    assert!(
        validate_title(Some(&"a".repeat(101)))
            .iter()
            .any(|e| e == TITLE_TOO_LONG)
    );
}
