//! Property-based tests for request validation
//!
//! Tests invariants:
//! - Accepted pagination is always within bounds
//! - Rejected input always carries at least one message
//! - Content length limits are exact

use proptest::prelude::*;
use serde_json::json;

use crate::core::validation::{
    parse_bias_check, parse_pagination, MAX_CONTENT_CHARS, MAX_PAGE_LIMIT,
};

proptest! {
    #[test]
    fn prop_valid_pagination_round_trips(page in 1usize..=10_000, limit in 1usize..=MAX_PAGE_LIMIT) {
        let parsed = parse_pagination(
            Some(&page.to_string()),
            Some(&limit.to_string()),
            12,
        );
        prop_assert_eq!(parsed, Ok(crate::core::validation::PaginationInput { page, limit }));
    }

    #[test]
    fn prop_non_positive_pages_are_rejected(page in -10_000i64..=0) {
        let err = parse_pagination(Some(&page.to_string()), None, 12).unwrap_err();
        prop_assert!(err.contains(&"page must be a positive integer".to_string()));
    }

    #[test]
    fn prop_out_of_range_limits_are_rejected(limit in 101usize..=10_000) {
        let err = parse_pagination(None, Some(&limit.to_string()), 12).unwrap_err();
        prop_assert!(err.contains(&"limit must be between 1 and 100".to_string()));
    }

    #[test]
    fn prop_rejected_bodies_always_carry_a_message(content in prop::option::of(0u8..3)) {
        // None, wrong type, or empty string: all invalid, all explained.
        let body = match content {
            None => json!({}),
            Some(0) => json!({ "content": 42 }),
            Some(1) => json!({ "content": "" }),
            Some(_) => json!({ "content": "   " }),
        };
        let err = parse_bias_check(&body).unwrap_err();
        prop_assert!(!err.is_empty());
    }

    #[test]
    fn prop_content_length_limit_is_exact(extra in 0usize..4) {
        let at_limit = "a".repeat(MAX_CONTENT_CHARS);
        let at_limit_body = json!({ "content": at_limit });
        prop_assert!(parse_bias_check(&at_limit_body).is_ok());

        let over = "a".repeat(MAX_CONTENT_CHARS + 1 + extra);
        let err = parse_bias_check(&json!({ "content": over })).unwrap_err();
        prop_assert!(err.contains(&"content must be less than 10,000 characters".to_string()));
    }
}
