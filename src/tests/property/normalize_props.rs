//! Property-based tests for the response normalizer
//!
//! Tests invariants:
//! - Clamped scores always land in 0..=100
//! - Fraction-scaled fields multiply by 100 before clamping
//! - Canonical alias names win over synonyms in any payload
//! - Missing fields always fall back to the documented defaults

use proptest::prelude::*;
use serde_json::json;

use crate::core::model::Severity;
use crate::core::normalize::{clamp_score, normalize_bias, normalize_copy};

proptest! {
    #[test]
    fn prop_clamped_score_is_always_in_band(value in -1_000_000.0..1_000_000.0f64) {
        let score = clamp_score(value, false);
        prop_assert!(score <= 100);
        prop_assert_eq!(score, value.clamp(0.0, 100.0).round() as u8);
    }

    #[test]
    fn prop_fraction_rule_scales_unit_interval(value in 0.0..=1.0f64) {
        prop_assert_eq!(clamp_score(value, true), (value * 100.0).round() as u8);
    }

    #[test]
    fn prop_fraction_rule_leaves_percentages_alone(value in 1.0001..100.0f64) {
        prop_assert_eq!(clamp_score(value, true), value.round() as u8);
    }

    // 0 and 1 are excluded: integral scores in the unit interval are
    // treated as fractions and scaled.
    #[test]
    fn prop_overall_score_round_trips_through_any_payload(score in 2u8..=100) {
        let insight = normalize_bias(&json!({ "overallScore": score }), None);
        prop_assert_eq!(insight.overall_score, score);
        prop_assert_eq!(insight.severity, Severity::from_score(score));
    }

    #[test]
    fn prop_canonical_overall_alias_wins(canonical in 2u8..=100, synonym in 2u8..=100) {
        let insight = normalize_bias(
            &json!({ "overallScore": canonical, "score": synonym }),
            None,
        );
        prop_assert_eq!(insight.overall_score, canonical);
    }

    #[test]
    fn prop_string_scores_coerce_like_numbers(score in 2u8..=100) {
        let insight = normalize_bias(&json!({ "overallScore": score.to_string() }), None);
        prop_assert_eq!(insight.overall_score, score);
    }

    #[test]
    fn prop_missing_fields_fall_back_to_defaults(garbage in "[a-z]{1,12}") {
        let insight = normalize_bias(&json!({ garbage.clone(): garbage }), None);
        prop_assert_eq!(insight.overall_score, 65);
        prop_assert_eq!(insight.campaign_id, "default");
        prop_assert_eq!(insight.metadata.model_version, "kolosal-unknown");
        prop_assert!((insight.metadata.confidence - 0.9).abs() < f64::EPSILON);
        prop_assert!(insight.biases.is_empty());
    }

    #[test]
    fn prop_variant_scores_are_always_in_band(
        inclusivity in -500.0..500.0f64,
        bias in -500.0..500.0f64,
    ) {
        let suggestion = normalize_copy(
            &json!({
                "suggestions": [{ "text": "x", "inclusivityScore": inclusivity, "biasScore": bias }],
            }),
            None,
            crate::core::model::Language::En,
            None,
        );
        let variant = &suggestion.suggestions[0];
        // inclusivityScore and biasScore are never fraction-scaled.
        prop_assert_eq!(variant.inclusivity_score, clamp_score(inclusivity, false));
        prop_assert_eq!(variant.bias_score, clamp_score(bias, false));
    }
}
