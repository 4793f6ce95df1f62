//! Request Validation
//!
//! Parses loosely-typed request bodies into typed inputs, collecting
//! every violation into a message list so the API can report them all at
//! once in the 400 envelope. Bodies arrive as `serde_json::Value` so a
//! wrong-typed field is a validation message, not a deserialization
//! failure.

use serde_json::Value;

use super::model::{BusinessType, Language, Tone};

pub const MAX_CONTENT_CHARS: usize = 10_000;
pub const MAX_PROMPT_CHARS: usize = 5_000;
pub const MAX_PAGE_LIMIT: usize = 100;

/// Validated `POST /api/bias` input.
#[derive(Debug, Clone, PartialEq)]
pub struct BiasCheckInput {
    pub campaign_id: Option<String>,
    pub content: String,
    pub language: Language,
}

/// Validated `POST /api/copy` input.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyInput {
    pub campaign_id: Option<String>,
    pub prompt: String,
    pub language: Language,
    pub tone: Option<Tone>,
}

/// Validated `POST /api/campaigns` input.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCampaignInput {
    pub business_name: String,
    pub business_type: BusinessType,
    pub target_audience: String,
    pub marketing_goals: Vec<String>,
}

/// Validated pagination query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInput {
    pub page: usize,
    pub limit: usize,
}

fn field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    body.get(name).filter(|v| !v.is_null())
}

/// Checks one required free-text field; pushes messages, returns the text
/// when usable.
fn required_text(
    body: &Value,
    name: &str,
    max_chars: usize,
    errors: &mut Vec<String>,
) -> Option<String> {
    let Some(value) = field(body, name) else {
        errors.push(format!("{name} is required"));
        return None;
    };
    let Some(text) = value.as_str() else {
        errors.push(format!("{name} must be a string"));
        return None;
    };
    if text.trim().is_empty() {
        errors.push(format!("{name} cannot be empty"));
        return None;
    }
    if text.chars().count() > max_chars {
        errors.push(format!(
            "{name} must be less than {} characters",
            group_thousands(max_chars)
        ));
        return None;
    }
    Some(text.to_string())
}

fn optional_language(body: &Value, errors: &mut Vec<String>) -> Language {
    match field(body, "language") {
        None => Language::En,
        Some(value) => match value.as_str().and_then(|s| s.parse::<Language>().ok()) {
            Some(language) => language,
            None => {
                errors.push("language must be \"en\" or \"id\"".to_string());
                Language::En
            }
        },
    }
}

fn optional_campaign_id(body: &Value) -> Option<String> {
    field(body, "campaignId")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// `POST /api/bias` body: content required (non-blank string, <= 10,000
/// chars); language optional, `en` or `id`.
pub fn parse_bias_check(body: &Value) -> Result<BiasCheckInput, Vec<String>> {
    let mut errors = Vec::new();
    let content = required_text(body, "content", MAX_CONTENT_CHARS, &mut errors);
    let language = optional_language(body, &mut errors);

    match (content, errors.is_empty()) {
        (Some(content), true) => Ok(BiasCheckInput {
            campaign_id: optional_campaign_id(body),
            content,
            language,
        }),
        (_, _) => Err(errors),
    }
}

/// `POST /api/copy` body: prompt required (non-blank string, <= 5,000
/// chars); language optional; tone optional, one of the six fixed tones.
pub fn parse_copy_request(body: &Value) -> Result<CopyInput, Vec<String>> {
    let mut errors = Vec::new();
    let prompt = required_text(body, "prompt", MAX_PROMPT_CHARS, &mut errors);
    let language = optional_language(body, &mut errors);

    let tone = match field(body, "tone") {
        None => None,
        Some(value) => match value.as_str().and_then(|s| s.parse::<Tone>().ok()) {
            Some(tone) => Some(tone),
            None => {
                errors.push(format!(
                    "tone must be one of: {}",
                    Tone::ALL
                        .iter()
                        .map(|t| t.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
                None
            }
        },
    };

    match (prompt, errors.is_empty()) {
        (Some(prompt), true) => Ok(CopyInput {
            campaign_id: optional_campaign_id(body),
            prompt,
            language,
            tone,
        }),
        (_, _) => Err(errors),
    }
}

/// `POST /api/campaigns` body: businessName, businessType and
/// targetAudience required non-blank strings, businessType one of the ten
/// known values, marketingGoals a non-empty string array.
pub fn parse_create_campaign(body: &Value) -> Result<CreateCampaignInput, Vec<String>> {
    let mut errors = Vec::new();

    let business_name = match field(body, "businessName").and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => {
            errors.push("businessName is required and must be a non-empty string".to_string());
            None
        }
    };

    let business_type = match field(body, "businessType").and_then(Value::as_str) {
        None => {
            errors.push("businessType is required and must be a non-empty string".to_string());
            None
        }
        Some(s) => match s.parse::<BusinessType>() {
            Ok(t) => Some(t),
            Err(()) => {
                errors.push(format!(
                    "businessType must be one of: {}",
                    BusinessType::ALL
                        .iter()
                        .map(|t| t.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
                None
            }
        },
    };

    let target_audience = match field(body, "targetAudience").and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => {
            errors.push("targetAudience is required and must be a non-empty string".to_string());
            None
        }
    };

    let marketing_goals = match field(body, "marketingGoals").and_then(Value::as_array) {
        Some(items) if !items.is_empty() && items.iter().all(Value::is_string) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect::<Vec<_>>(),
        ),
        _ => {
            errors.push(
                "marketingGoals is required and must be a non-empty array of strings".to_string(),
            );
            None
        }
    };

    match (
        business_name,
        business_type,
        target_audience,
        marketing_goals,
    ) {
        (Some(business_name), Some(business_type), Some(target_audience), Some(marketing_goals))
            if errors.is_empty() =>
        {
            Ok(CreateCampaignInput {
                business_name,
                business_type,
                target_audience,
                marketing_goals,
            })
        }
        _ => Err(errors),
    }
}

/// `?page=&limit=` query: page >= 1, 1 <= limit <= 100, both optional.
pub fn parse_pagination(
    page: Option<&str>,
    limit: Option<&str>,
    default_limit: usize,
) -> Result<PaginationInput, Vec<String>> {
    let mut errors = Vec::new();

    let page = match page {
        None => 1,
        Some(raw) => match raw.parse::<i64>() {
            Ok(n) if n >= 1 => n as usize,
            _ => {
                errors.push("page must be a positive integer".to_string());
                1
            }
        },
    };

    let limit = match limit {
        None => default_limit,
        Some(raw) => match raw.parse::<i64>() {
            Ok(n) if (1..=MAX_PAGE_LIMIT as i64).contains(&n) => n as usize,
            _ => {
                errors.push(format!("limit must be between 1 and {MAX_PAGE_LIMIT}"));
                default_limit
            }
        },
    };

    if errors.is_empty() {
        Ok(PaginationInput { page, limit })
    } else {
        Err(errors)
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_bias_check_happy_path() {
        let body = json!({ "content": "Great offers for everyone", "language": "id", "campaignId": "c-1" });
        let input = parse_bias_check(&body).unwrap();
        assert_eq!(input.content, "Great offers for everyone");
        assert_eq!(input.language, Language::Id);
        assert_eq!(input.campaign_id.as_deref(), Some("c-1"));
    }

    #[rstest]
    #[case(json!({}), "content is required")]
    #[case(json!({ "content": 42 }), "content must be a string")]
    #[case(json!({ "content": "   " }), "content cannot be empty")]
    #[case(json!({ "content": "" }), "content cannot be empty")]
    fn test_bias_check_content_rules(#[case] body: Value, #[case] expected: &str) {
        let errors = parse_bias_check(&body).unwrap_err();
        assert!(errors.iter().any(|e| e == expected), "{errors:?}");
    }

    #[test]
    fn test_bias_check_rejects_oversized_content() {
        let body = json!({ "content": "x".repeat(MAX_CONTENT_CHARS + 1) });
        let errors = parse_bias_check(&body).unwrap_err();
        assert_eq!(errors, vec!["content must be less than 10,000 characters"]);
    }

    #[test]
    fn test_bias_check_rejects_unknown_language() {
        let body = json!({ "content": "hello", "language": "fr" });
        let errors = parse_bias_check(&body).unwrap_err();
        assert_eq!(errors, vec!["language must be \"en\" or \"id\""]);
    }

    #[test]
    fn test_copy_request_rules() {
        let body = json!({ "prompt": "write copy", "tone": "casual" });
        let input = parse_copy_request(&body).unwrap();
        assert_eq!(input.tone, Some(Tone::Casual));
        assert_eq!(input.language, Language::En);

        let body = json!({ "prompt": "write copy", "tone": "invalid-tone" });
        let errors = parse_copy_request(&body).unwrap_err();
        assert!(errors[0].starts_with("tone must be one of:"));

        let body = json!({ "prompt": "p".repeat(MAX_PROMPT_CHARS + 1) });
        let errors = parse_copy_request(&body).unwrap_err();
        assert_eq!(errors, vec!["prompt must be less than 5,000 characters"]);
    }

    #[test]
    fn test_create_campaign_collects_all_errors() {
        let errors = parse_create_campaign(&json!({})).unwrap_err();
        assert_eq!(errors.len(), 4);

        let body = json!({
            "businessName": "Warung Sari",
            "businessType": "Warung",
            "targetAudience": "locals",
            "marketingGoals": ["Establish online presence"],
        });
        let input = parse_create_campaign(&body).unwrap();
        assert_eq!(input.business_type, BusinessType::Warung);
        assert_eq!(input.marketing_goals.len(), 1);
    }

    #[rstest]
    #[case(json!({ "businessName": "A", "businessType": "Spaceport", "targetAudience": "t", "marketingGoals": ["g"] }))]
    #[case(json!({ "businessName": "A", "businessType": "Warung", "targetAudience": "t", "marketingGoals": [] }))]
    #[case(json!({ "businessName": "A", "businessType": "Warung", "targetAudience": "t", "marketingGoals": [1, 2] }))]
    #[case(json!({ "businessName": "A", "businessType": "Warung", "targetAudience": "t", "marketingGoals": "growth" }))]
    fn test_create_campaign_rejections(#[case] body: Value) {
        assert!(parse_create_campaign(&body).is_err());
    }

    #[rstest]
    #[case(None, None, Ok(PaginationInput { page: 1, limit: 12 }))]
    #[case(Some("2"), Some("5"), Ok(PaginationInput { page: 2, limit: 5 }))]
    #[case(Some("-1"), None, Err(()))]
    #[case(Some("0"), None, Err(()))]
    #[case(Some("abc"), None, Err(()))]
    #[case(None, Some("0"), Err(()))]
    #[case(None, Some("101"), Err(()))]
    fn test_pagination_rules(
        #[case] page: Option<&str>,
        #[case] limit: Option<&str>,
        #[case] expected: Result<PaginationInput, ()>,
    ) {
        let result = parse_pagination(page, limit, 12);
        match expected {
            Ok(input) => assert_eq!(result.unwrap(), input),
            Err(()) => assert!(result.is_err()),
        }
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(group_thousands(10_000), "10,000");
        assert_eq!(group_thousands(5_000), "5,000");
        assert_eq!(group_thousands(100), "100");
    }
}
