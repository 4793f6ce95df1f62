//! Response Normalizer
//!
//! Maps arbitrarily-shaped JSON (from the external Kolosal service or any
//! other source) into the fixed internal schemas. Each field is resolved
//! through an ordered alias chain and falls back to a hardcoded default,
//! so these functions always return a fully-populated object and never
//! fail. Score fields are coerced to numbers, clamped to [0, 100], and
//! rounded; overall-score style fields additionally treat a value in
//! [0, 1] as a 0-1 fraction and scale it by 100 before clamping.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::Value;
use uuid::Uuid;

use super::model::{
    BiasCategory, BiasDetection, BiasInsight, BiasMetadata, CopyMetadata, CopySuggestion,
    CopyVariant, Engagement, Language, PlatformStats, Severity, Tone,
};

// ============================================================================
// Alias Tables
// ============================================================================

/// A score alias with its fraction-scaling flag. The flag is set on the
/// aliases the upstream contract documents as overall scores
/// (`overallScore`/`score`), where a sub-1 decimal means a 0-1 fraction.
type ScoreAlias = (&'static str, bool);

const BIAS_LIST_ALIASES: &[&str] = &["biases", "issues", "detections", "findings"];
const BIAS_SUGGESTION_ALIASES: &[&str] = &["suggestions", "tips", "recommendations"];
const BIAS_OVERALL_ALIASES: &[ScoreAlias] = &[("overallScore", true), ("score", true)];
const DETECTION_SCORE_ALIASES: &[ScoreAlias] = &[("score", true)];
const ID_ALIASES: &[&str] = &["id", "_id", "uuid"];
const TIMESTAMP_ALIASES: &[&str] = &["detectedAt", "createdAt", "timestamp"];

const VARIANT_LIST_ALIASES: &[&str] = &["suggestions", "variants"];
const VARIANT_TEXT_ALIASES: &[&str] = &["text", "content", "copy"];
const VARIANT_INCLUSIVITY_ALIASES: &[ScoreAlias] = &[("inclusivityScore", false), ("score", true)];
const VARIANT_BIAS_ALIASES: &[ScoreAlias] = &[("biasScore", false), ("bias", false)];
const COPY_INCLUSIVITY_ALIASES: &[ScoreAlias] =
    &[("metadata.inclusivityScore", false), ("overallScore", true)];

// ============================================================================
// Field Extraction
// ============================================================================

/// Walk a dotted path (`metadata.modelVersion`) through nested objects.
fn lookup<'a>(raw: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = raw;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

fn first_present<'a>(raw: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|alias| lookup(raw, alias))
}

/// Numeric coercion in the JS `Number()` spirit: numbers pass through,
/// numeric strings parse, everything else is absent.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Clamp a raw score to an integer in [0, 100], optionally applying the
/// fraction-to-percent rule first.
pub fn clamp_score(value: f64, scale_fraction: bool) -> u8 {
    let value = if scale_fraction && (0.0..=1.0).contains(&value) {
        value * 100.0
    } else {
        value
    };
    value.clamp(0.0, 100.0).round() as u8
}

fn score_field(raw: &Value, aliases: &[ScoreAlias], default: u8) -> u8 {
    for &(alias, scale_fraction) in aliases {
        if let Some(value) = lookup(raw, alias) {
            return match as_number(value) {
                Some(n) if n.is_finite() => clamp_score(n, scale_fraction),
                _ => default,
            };
        }
    }
    default
}

fn string_field(raw: &Value, aliases: &[&str], default: &str) -> String {
    first_present(raw, aliases)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn float_field(raw: &Value, aliases: &[&str], default: f64) -> f64 {
    first_present(raw, aliases)
        .and_then(as_number)
        .filter(|n| n.is_finite())
        .unwrap_or(default)
}

fn id_field(raw: &Value) -> String {
    first_present(raw, ID_ALIASES)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

fn timestamp_field(raw: &Value, aliases: &[&str]) -> DateTime<Utc> {
    first_present(raw, aliases)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

fn string_list(raw: &Value, aliases: &[&str]) -> Vec<String> {
    first_present(raw, aliases)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// A list alias chain with scalar fallbacks that get wrapped into a
/// one-element list (`examples` -> `example` -> `sample`).
fn list_or_scalar(raw: &Value, list_aliases: &[&str], scalar_aliases: &[&str]) -> Vec<String> {
    if let Some(items) = first_present(raw, list_aliases).and_then(Value::as_array) {
        return items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
    }
    first_present(raw, scalar_aliases)
        .and_then(Value::as_str)
        .map(|s| vec![s.to_string()])
        .unwrap_or_default()
}

fn campaign_id_field(raw: &Value, campaign_id: Option<&str>) -> String {
    campaign_id
        .map(str::to_string)
        .or_else(|| {
            lookup(raw, "campaignId")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| "default".to_string())
}

// ============================================================================
// Bias Report
// ============================================================================

fn normalize_detection(raw: &Value) -> BiasDetection {
    let category = string_field(raw, &["type", "category"], "gender")
        .parse::<BiasCategory>()
        .unwrap_or(BiasCategory::Gender);

    BiasDetection {
        category,
        description: string_field(raw, &["description"], "Potential bias detected"),
        affected_text: string_field(raw, &["affectedText", "text"], ""),
        score: score_field(raw, DETECTION_SCORE_ALIASES, 50),
        recommendation: string_field(
            raw,
            &["recommendation", "suggestion"],
            "Use neutral language",
        ),
        examples: list_or_scalar(raw, &["examples"], &["example", "sample"]),
    }
}

/// Map any JSON shape into a fully-populated [`BiasInsight`].
pub fn normalize_bias(raw: &Value, campaign_id: Option<&str>) -> BiasInsight {
    let biases: Vec<BiasDetection> = first_present(raw, BIAS_LIST_ALIASES)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(normalize_detection).collect())
        .unwrap_or_default();

    let overall_score = score_field(raw, BIAS_OVERALL_ALIASES, 65);
    let severity = string_field(raw, &["severity"], "")
        .parse::<Severity>()
        .unwrap_or_else(|_| Severity::from_score(overall_score));

    BiasInsight {
        id: id_field(raw),
        campaign_id: campaign_id_field(raw, campaign_id),
        detected_at: timestamp_field(raw, TIMESTAMP_ALIASES),
        overall_score,
        severity,
        biases,
        suggestions: string_list(raw, BIAS_SUGGESTION_ALIASES),
        metadata: BiasMetadata {
            model_version: string_field(
                raw,
                &["metadata.modelVersion", "modelVersion"],
                "kolosal-unknown",
            ),
            confidence: float_field(raw, &["metadata.confidence", "confidence"], 0.9),
        },
    }
}

// ============================================================================
// Copy Suggestions
// ============================================================================

fn normalize_variant(raw: &Value, language: Language, tone: Option<Tone>) -> CopyVariant {
    let fallback_tone = tone.unwrap_or(Tone::Friendly);

    CopyVariant {
        id: id_field(raw),
        text: string_field(raw, VARIANT_TEXT_ALIASES, ""),
        language: string_field(raw, &["language"], "")
            .parse::<Language>()
            .unwrap_or(language),
        tone: string_field(raw, &["tone"], "")
            .parse::<Tone>()
            .unwrap_or(fallback_tone),
        inclusivity_score: score_field(raw, VARIANT_INCLUSIVITY_ALIASES, 85),
        bias_score: score_field(raw, VARIANT_BIAS_ALIASES, 15),
        engagement: Engagement {
            predicted: float_field(raw, &["engagement.predicted", "predictedEngagement"], 5.0),
            confidence: float_field(raw, &["engagement.confidence", "engagementConfidence"], 0.85),
        },
        highlights: list_or_scalar(raw, &["highlights"], &["highlight"]),
    }
}

/// Map any JSON shape into a fully-populated [`CopySuggestion`].
pub fn normalize_copy(
    raw: &Value,
    campaign_id: Option<&str>,
    language: Language,
    tone: Option<Tone>,
) -> CopySuggestion {
    let suggestions: Vec<CopyVariant> = first_present(raw, VARIANT_LIST_ALIASES)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| normalize_variant(item, language, tone))
                .collect()
        })
        .unwrap_or_default();

    CopySuggestion {
        id: id_field(raw),
        campaign_id: campaign_id_field(raw, campaign_id),
        language: string_field(raw, &["language"], "")
            .parse::<Language>()
            .unwrap_or(language),
        original: string_field(raw, &["original", "input", "prompt"], ""),
        suggestions,
        created_at: timestamp_field(raw, &["createdAt", "timestamp"]),
        metadata: CopyMetadata {
            target_audience: string_field(
                raw,
                &["metadata.targetAudience", "targetAudience"],
                "Broad audience",
            ),
            tone: string_field(raw, &["metadata.tone", "tone"], "")
                .parse::<Tone>()
                .unwrap_or_else(|_| tone.unwrap_or(Tone::Friendly)),
            inclusivity_score: score_field(raw, COPY_INCLUSIVITY_ALIASES, 90),
        },
    }
}

// ============================================================================
// Platform Stats
// ============================================================================

fn distribution_field(raw: &Value, aliases: &[&str]) -> IndexMap<String, u64> {
    first_present(raw, aliases)
        .and_then(Value::as_object)
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| {
                    as_number(v).map(|n| (k.clone(), n.max(0.0).round() as u64))
                })
                .collect()
        })
        .unwrap_or_default()
}

fn count_field(raw: &Value, aliases: &[&str]) -> u64 {
    first_present(raw, aliases)
        .and_then(as_number)
        .map(|n| n.max(0.0).round() as u64)
        .unwrap_or(0)
}

/// Map any JSON shape into a fully-populated [`PlatformStats`].
pub fn normalize_stats(raw: &Value) -> PlatformStats {
    PlatformStats {
        total_campaigns: count_field(raw, &["totalCampaigns", "campaigns"]),
        business_type_distribution: distribution_field(
            raw,
            &["businessTypeDistribution", "byBusinessType"],
        ),
        city_distribution: distribution_field(raw, &["cityDistribution", "byCity"]),
        average_inclusivity_score: float_field(
            raw,
            &["averageInclusivityScore", "avgInclusivity"],
            0.0,
        ),
        total_biases_detected: float_field(
            raw,
            &["totalBiasesDetected", "totalBiases", "biasesDetected"],
            0.0,
        ),
    }
}
