//! Domain & Wire Types
//!
//! Shared data model for campaign personas, bias insights, copy
//! suggestions, and platform statistics. All wire DTOs serialize with
//! camelCase keys; closed vocabularies are proper enums so the
//! sector/business-type and severity/score invariants are enforced by
//! construction.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Campaign Persona
// ============================================================================

/// The ten supported small-business types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessType {
    Warung,
    #[serde(rename = "Toko Kelontong")]
    TokoKelontong,
    #[serde(rename = "UMKM Fashion")]
    UmkmFashion,
    #[serde(rename = "F&B")]
    FoodAndBeverage,
    Tourism,
    Handicrafts,
    #[serde(rename = "Tech/Digital Services")]
    TechDigitalServices,
    #[serde(rename = "Beauty/Salon")]
    BeautySalon,
    Agriculture,
    Education,
}

impl BusinessType {
    pub const ALL: [BusinessType; 10] = [
        Self::Warung,
        Self::TokoKelontong,
        Self::UmkmFashion,
        Self::FoodAndBeverage,
        Self::Tourism,
        Self::Handicrafts,
        Self::TechDigitalServices,
        Self::BeautySalon,
        Self::Agriculture,
        Self::Education,
    ];

    /// Wire label, identical to the serde rename.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Warung => "Warung",
            Self::TokoKelontong => "Toko Kelontong",
            Self::UmkmFashion => "UMKM Fashion",
            Self::FoodAndBeverage => "F&B",
            Self::Tourism => "Tourism",
            Self::Handicrafts => "Handicrafts",
            Self::TechDigitalServices => "Tech/Digital Services",
            Self::BeautySalon => "Beauty/Salon",
            Self::Agriculture => "Agriculture",
            Self::Education => "Education",
        }
    }

    /// Fixed 1:1 business-type to sector mapping.
    pub fn sector(&self) -> &'static str {
        match self {
            Self::Warung | Self::TokoKelontong => "Retail",
            Self::UmkmFashion => "Fashion & Apparel",
            Self::FoodAndBeverage => "Food & Beverage",
            Self::Tourism => "Tourism & Hospitality",
            Self::Handicrafts => "Crafts & Artisan",
            Self::TechDigitalServices => "Technology",
            Self::BeautySalon => "Beauty & Wellness",
            Self::Agriculture => "Agriculture",
            Self::Education => "Education",
        }
    }
}

impl FromStr for BusinessType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .ok_or(())
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-binary")]
    NonBinary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "High School")]
    HighSchool,
    Diploma,
    Bachelor,
    Master,
}

/// Monthly revenue bucket in millions of rupiah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenueBucket {
    #[serde(rename = "< 5 juta")]
    Under5,
    #[serde(rename = "5-15 juta")]
    From5To15,
    #[serde(rename = "15-50 juta")]
    From15To50,
    #[serde(rename = "> 50 juta")]
    Over50,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age: u8,
    pub gender: Gender,
    pub education: Education,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalPresence {
    pub has_website: bool,
    pub has_social_media: bool,
    pub platforms: Vec<String>,
    pub monthly_posts: u8,
}

/// A synthetic small-business campaign persona.
///
/// Invariants: `sector` is always `business_type.sector()`; `platforms`
/// is empty and `monthly_posts` is 0 when `has_social_media` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPersona {
    pub id: String,
    pub name: String,
    pub business_name: String,
    pub business_type: BusinessType,
    pub sector: String,
    pub city: String,
    pub province: String,
    pub demographics: Demographics,
    pub pain_points: Vec<String>,
    pub marketing_goals: Vec<String>,
    pub target_audience: String,
    pub monthly_revenue: RevenueBucket,
    pub digital_presence: DigitalPresence,
    pub created_at: DateTime<Utc>,
}

impl CampaignPersona {
    /// Re-point the persona at a different business type, keeping the
    /// sector mapping intact.
    pub fn set_business_type(&mut self, business_type: BusinessType) {
        self.business_type = business_type;
        self.sector = business_type.sector().to_string();
    }
}

// ============================================================================
// Bias Insight
// ============================================================================

/// The seven bias categories the checker reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasCategory {
    Gender,
    Age,
    Economic,
    Religious,
    Ethnic,
    Disability,
    Appearance,
}

impl BiasCategory {
    pub const ALL: [BiasCategory; 7] = [
        Self::Gender,
        Self::Age,
        Self::Economic,
        Self::Religious,
        Self::Ethnic,
        Self::Disability,
        Self::Appearance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Economic => "economic",
            Self::Religious => "religious",
            Self::Ethnic => "ethnic",
            Self::Disability => "disability",
            Self::Appearance => "appearance",
        }
    }
}

impl FromStr for BiasCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or(())
    }
}

/// Severity bands derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Fixed thresholds: <30 low, <60 medium, <80 high, else critical.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => Self::Low,
            30..=59 => Self::Medium,
            60..=79 => Self::High,
            _ => Self::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(()),
        }
    }
}

/// One flagged issue inside a bias report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasDetection {
    #[serde(rename = "type")]
    pub category: BiasCategory,
    pub description: String,
    pub affected_text: String,
    pub score: u8,
    pub recommendation: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasMetadata {
    pub model_version: String,
    pub confidence: f64,
}

/// A bias-detection report for one piece of marketing copy.
///
/// `overall_score` is the rounded mean of `biases[].score` whenever
/// `biases` is nonempty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasInsight {
    pub id: String,
    pub campaign_id: String,
    pub detected_at: DateTime<Utc>,
    pub overall_score: u8,
    pub severity: Severity,
    pub biases: Vec<BiasDetection>,
    pub suggestions: Vec<String>,
    pub metadata: BiasMetadata,
}

// ============================================================================
// Copy Suggestions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "id" => Ok(Self::Id),
            _ => Err(()),
        }
    }
}

/// The six accepted copy tones. The mock engine only ever emits five of
/// them; `formal` is valid input that simply has no canned rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Friendly,
    Casual,
    Formal,
    Enthusiastic,
    Empathetic,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Self::Professional,
        Self::Friendly,
        Self::Casual,
        Self::Formal,
        Self::Enthusiastic,
        Self::Empathetic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Enthusiastic => "enthusiastic",
            Self::Empathetic => "empathetic",
        }
    }
}

impl FromStr for Tone {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    pub predicted: f64,
    pub confidence: f64,
}

/// One tone-variant rewrite of the original copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyVariant {
    pub id: String,
    pub text: String,
    pub language: Language,
    pub tone: Tone,
    pub inclusivity_score: u8,
    pub bias_score: u8,
    pub engagement: Engagement,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyMetadata {
    pub target_audience: String,
    pub tone: Tone,
    pub inclusivity_score: u8,
}

/// A set of inclusive rewrites for one prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySuggestion {
    pub id: String,
    pub campaign_id: String,
    pub language: Language,
    pub original: String,
    pub suggestions: Vec<CopyVariant>,
    pub created_at: DateTime<Utc>,
    pub metadata: CopyMetadata,
}

impl CopySuggestion {
    /// Keep only variants matching the requested tone.
    pub fn retain_tone(&mut self, tone: Tone) {
        self.suggestions.retain(|v| v.tone == tone);
    }
}

// ============================================================================
// Platform Stats
// ============================================================================

/// Aggregate platform statistics. Recomputed on every request on the
/// local path; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_campaigns: u64,
    pub business_type_distribution: IndexMap<String, u64>,
    pub city_distribution: IndexMap<String, u64>,
    pub average_inclusivity_score: f64,
    pub total_biases_detected: f64,
}
