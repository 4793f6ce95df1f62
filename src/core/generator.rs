//! Mock Data Engine
//!
//! Seeded pseudo-random generators for campaign personas, bias insights,
//! and copy suggestions. All output is synthesized from the fixed
//! vocabularies below; nothing here can fail. One engine is built at
//! startup and shared, so a fixed seed yields a deterministic sequence
//! across a process run (wall-clock fields excepted).

use chrono::{Duration, Utc};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

use super::model::{
    BiasCategory, BiasDetection, BiasInsight, BiasMetadata, BusinessType, CampaignPersona,
    CopyMetadata, CopySuggestion, CopyVariant, Demographics, DigitalPresence, Education,
    Engagement, Gender, Language, RevenueBucket, Severity, Tone,
};

/// Seed used for the demo dataset.
pub const DEFAULT_SEED: u64 = 42069;

// ============================================================================
// Fixed Vocabularies
// ============================================================================

const CITIES: [(&str, &str); 15] = [
    ("Jakarta", "DKI Jakarta"),
    ("Surabaya", "Jawa Timur"),
    ("Bandung", "Jawa Barat"),
    ("Medan", "Sumatera Utara"),
    ("Semarang", "Jawa Tengah"),
    ("Makassar", "Sulawesi Selatan"),
    ("Palembang", "Sumatera Selatan"),
    ("Tangerang", "Banten"),
    ("Depok", "Jawa Barat"),
    ("Bekasi", "Jawa Barat"),
    ("Yogyakarta", "DI Yogyakarta"),
    ("Malang", "Jawa Timur"),
    ("Denpasar", "Bali"),
    ("Bogor", "Jawa Barat"),
    ("Batam", "Kepulauan Riau"),
];

const PAIN_POINTS: [&str; 12] = [
    "Limited digital presence and online visibility",
    "Difficulty reaching younger demographics",
    "Language barriers in marketing materials",
    "Budget constraints for advertising",
    "Lack of marketing expertise and resources",
    "Inconsistent brand messaging across channels",
    "Challenges with inclusive language",
    "Limited understanding of target audience",
    "Difficulty measuring marketing ROI",
    "Competition from larger businesses",
    "Seasonal revenue fluctuations",
    "Low social media engagement",
];

const MARKETING_GOALS: [&str; 10] = [
    "Increase brand awareness in local community",
    "Attract more customers through social media",
    "Build inclusive brand identity",
    "Expand to new customer segments",
    "Improve customer retention",
    "Launch new products/services",
    "Establish online presence",
    "Create engaging content consistently",
    "Connect with millennial and Gen Z audiences",
    "Develop sustainable marketing strategy",
];

const SOCIAL_PLATFORMS: [&str; 8] = [
    "Instagram",
    "Facebook",
    "TikTok",
    "WhatsApp Business",
    "Tokopedia",
    "Shopee",
    "Twitter/X",
    "YouTube",
];

const FIRST_NAMES: [&str; 16] = [
    "Sari", "Budi", "Dewi", "Agus", "Rina", "Eko", "Putri", "Andi", "Lestari", "Hendra", "Ayu",
    "Joko", "Fitri", "Rizky", "Maya", "Dian",
];

const FAMILY_NAMES: [&str; 12] = [
    "Wijaya", "Santoso", "Pratama", "Kusuma", "Saputra", "Hidayat", "Nugroho", "Utami",
    "Setiawan", "Rahayu", "Susanto", "Halim",
];

const NAME_TOKEN_ADJECTIVES: [&str; 10] = [
    "Makmur", "Sejahtera", "Jaya", "Berkah", "Harmoni", "Ceria", "Mandiri", "Sentosa", "Indah",
    "Lestari",
];

const AUDIENCE_AGE_RANGES: [&str; 5] = ["18-24", "25-34", "35-44", "45-54", "55+"];

const AUDIENCE_GROUPS: [&str; 5] = [
    "young professionals",
    "families",
    "students",
    "locals",
    "tourists",
];

const GENDERS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::NonBinary];

const EDUCATIONS: [Education; 4] = [
    Education::HighSchool,
    Education::Diploma,
    Education::Bachelor,
    Education::Master,
];

const REVENUE_BUCKETS: [RevenueBucket; 4] = [
    RevenueBucket::Under5,
    RevenueBucket::From5To15,
    RevenueBucket::From15To50,
    RevenueBucket::Over50,
];

/// Type-specific business name prefixes.
fn name_prefixes(business_type: BusinessType) -> &'static [&'static str] {
    match business_type {
        BusinessType::Warung => &["Warung", "Kedai"],
        BusinessType::TokoKelontong => &["Toko", "Swalayan"],
        BusinessType::UmkmFashion => &["Butik", "Fashion"],
        BusinessType::FoodAndBeverage => &["Kafe", "Resto", "Kedai Kopi"],
        BusinessType::Tourism => &["Tour", "Wisata", "Travel"],
        BusinessType::Handicrafts => &["Kerajinan", "Handmade"],
        BusinessType::TechDigitalServices => &["Digital", "Tech", "Studio"],
        BusinessType::BeautySalon => &["Salon", "Beauty", "Klinik Kecantikan"],
        BusinessType::Agriculture => &["Tani", "Agro", "Organik"],
        BusinessType::Education => &["Kursus", "Les", "Bimbel"],
    }
}

// ============================================================================
// Bias Templates
// ============================================================================

struct BiasTemplate {
    description: &'static str,
    affected_text: &'static str,
    recommendation: &'static str,
    examples: [&'static str; 2],
}

fn bias_template(category: BiasCategory) -> BiasTemplate {
    match category {
        BiasCategory::Gender => BiasTemplate {
            description: "Language reinforces traditional gender stereotypes",
            affected_text: "Best for housewives and working men",
            recommendation: "Use gender-neutral language like \"homemakers\" and \"professionals\"",
            examples: [
                "Replace \"housewives\" with \"home managers\" or \"primary caregivers\"",
                "Replace \"working men\" with \"working professionals\"",
            ],
        },
        BiasCategory::Age => BiasTemplate {
            description: "Content assumes specific age demographics",
            affected_text: "Perfect for young people and tech-savvy millennials",
            recommendation: "Avoid age-specific assumptions; focus on interests instead",
            examples: [
                "Replace \"young people\" with \"active individuals\"",
                "Replace \"tech-savvy millennials\" with \"digital enthusiasts\"",
            ],
        },
        BiasCategory::Economic => BiasTemplate {
            description: "Language excludes lower-income segments",
            affected_text: "Affordable luxury for the discerning elite",
            recommendation: "Use inclusive pricing language without class implications",
            examples: [
                "Replace \"elite\" with \"everyone\"",
                "Emphasize value rather than exclusivity",
            ],
        },
        BiasCategory::Religious => BiasTemplate {
            description: "Assumes specific religious practices",
            affected_text: "Open every day including Sundays",
            recommendation: "Use neutral time references",
            examples: [
                "Replace \"including Sundays\" with \"7 days a week\"",
                "Avoid religion-specific holiday references",
            ],
        },
        BiasCategory::Ethnic => BiasTemplate {
            description: "May perpetuate ethnic stereotypes",
            affected_text: "Traditional authentic Indonesian experience",
            recommendation: "Be specific about cultural elements without stereotyping",
            examples: [
                "Specify which regional culture is represented",
                "Avoid generalizations about \"Indonesian\" culture",
            ],
        },
        BiasCategory::Disability => BiasTemplate {
            description: "Language may exclude people with disabilities",
            affected_text: "Walk in today! See our amazing displays",
            recommendation: "Use inclusive action verbs",
            examples: [
                "Replace \"walk in\" with \"visit us\"",
                "Replace \"see\" with \"explore\" or \"discover\"",
            ],
        },
        BiasCategory::Appearance => BiasTemplate {
            description: "Promotes specific beauty standards",
            affected_text: "Get slim and beautiful with our program",
            recommendation: "Focus on health and wellbeing, not appearance",
            examples: [
                "Replace \"slim and beautiful\" with \"healthy and confident\"",
                "Emphasize feeling good rather than looking a certain way",
            ],
        },
    }
}

const GENERIC_TIPS: [&str; 2] = [
    "Review all marketing copy with an inclusive lens",
    "Test messaging with diverse focus groups",
];

fn category_tip(category: BiasCategory) -> &'static str {
    match category {
        BiasCategory::Gender => "Implement gender-neutral language guidelines",
        BiasCategory::Age => "Focus on lifestyle and interests rather than age",
        BiasCategory::Economic => "Emphasize value accessibility for all income levels",
        BiasCategory::Religious => "Use culturally neutral time and event references",
        BiasCategory::Ethnic => "Celebrate specific cultures without stereotyping",
        BiasCategory::Disability => "Ensure all calls-to-action are accessibility-focused",
        BiasCategory::Appearance => "Promote health and confidence over specific looks",
    }
}

// ============================================================================
// Copy Templates
// ============================================================================

/// Tones the engine actually rewrites into; `formal` has no template.
const GENERATED_TONES: [Tone; 5] = [
    Tone::Professional,
    Tone::Friendly,
    Tone::Casual,
    Tone::Enthusiastic,
    Tone::Empathetic,
];

fn original_copy(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Visit our store for special offers! Perfect for housewives and office workers."
        }
        Language::Id => {
            "Kunjungi toko kami untuk penawaran spesial! Cocok untuk ibu rumah tangga dan pekerja kantoran."
        }
    }
}

fn rewrite(language: Language, tone: Tone) -> &'static str {
    match (language, tone) {
        (Language::En, Tone::Professional) => {
            "We invite you to explore our exclusive offerings designed for busy professionals and home managers alike."
        }
        (Language::En, Tone::Friendly) => {
            "Come check out our amazing deals! Great for anyone managing a household or career."
        }
        (Language::En, Tone::Casual) => {
            "Stop by and see what we've got! Perfect for people juggling work and home life."
        }
        (Language::En, Tone::Enthusiastic) => {
            "Don't miss our incredible special offers! Ideal for anyone balancing professional and personal commitments!"
        }
        (Language::En, Tone::Empathetic) => {
            "We understand your busy life. Discover solutions that work for professionals and caregivers."
        }
        (Language::Id, Tone::Professional) => {
            "Kami mengundang Anda untuk menjelajahi penawaran eksklusif kami yang dirancang untuk profesional dan pengelola rumah tangga."
        }
        (Language::Id, Tone::Friendly) => {
            "Yuk mampir dan lihat penawaran menarik kami! Cocok untuk siapa saja yang mengelola rumah tangga atau karier."
        }
        (Language::Id, Tone::Casual) => {
            "Mampir yuk, lihat apa yang kami punya! Pas banget buat yang sibuk dengan pekerjaan dan urusan rumah."
        }
        (Language::Id, Tone::Enthusiastic) => {
            "Jangan lewatkan penawaran spesial kami yang luar biasa! Ideal untuk siapa saja yang menyeimbangkan komitmen profesional dan pribadi!"
        }
        (Language::Id, Tone::Empathetic) => {
            "Kami memahami kesibukan Anda. Temukan solusi yang cocok untuk profesional dan pengasuh."
        }
        // `formal` never reaches here; GENERATED_TONES gates the callers.
        (_, Tone::Formal) => "",
    }
}

fn tone_highlights(tone: Tone) -> Vec<String> {
    let highlights: &[&str] = match tone {
        Tone::Professional => &[
            "Formal and respectful language",
            "Gender-neutral terminology",
            "Inclusive of all roles",
        ],
        Tone::Friendly => &[
            "Warm and approachable tone",
            "Casual without bias",
            "Welcoming to everyone",
        ],
        Tone::Casual => &[
            "Conversational and relatable",
            "Avoids stereotypes",
            "Appeals to diverse audiences",
        ],
        Tone::Enthusiastic => &[
            "Energetic and motivating",
            "Inclusive excitement",
            "Positive without exclusion",
        ],
        Tone::Empathetic => &[
            "Understanding and supportive",
            "Acknowledges diverse challenges",
            "Non-judgmental approach",
        ],
        Tone::Formal => &[],
    };
    highlights.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Engine
// ============================================================================

/// Shared generator for all mock payloads.
pub struct MockDataEngine {
    rng: Mutex<StdRng>,
}

impl MockDataEngine {
    /// Deterministic engine for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Engine seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    /// Generate one synthetic campaign persona.
    pub fn persona(&self) -> CampaignPersona {
        self.with_rng(|rng| {
            let business_type = *BusinessType::ALL.choose(rng).unwrap_or(&BusinessType::Warung);
            let (city, province) = *CITIES.choose(rng).unwrap_or(&CITIES[0]);
            let has_digital = rng.gen_bool(0.6);

            let pain_count = rng.gen_range(2..=4);
            let goal_count = rng.gen_range(2..=3);

            CampaignPersona {
                id: Uuid::new_v4().to_string(),
                name: full_name(rng),
                business_name: business_name(rng, business_type),
                business_type,
                sector: business_type.sector().to_string(),
                city: city.to_string(),
                province: province.to_string(),
                demographics: Demographics {
                    age: rng.gen_range(25..=65),
                    gender: *GENDERS.choose(rng).unwrap_or(&Gender::Female),
                    education: *EDUCATIONS.choose(rng).unwrap_or(&Education::Bachelor),
                    experience: format!("{} years", rng.gen_range(1..=20)),
                },
                pain_points: sample_strings(rng, &PAIN_POINTS, pain_count),
                marketing_goals: sample_strings(rng, &MARKETING_GOALS, goal_count),
                target_audience: target_audience(rng),
                monthly_revenue: *REVENUE_BUCKETS.choose(rng).unwrap_or(&RevenueBucket::Under5),
                digital_presence: DigitalPresence {
                    has_website: has_digital && rng.gen_bool(0.3),
                    has_social_media: has_digital,
                    platforms: if has_digital {
                        let n = rng.gen_range(1..=4);
                        sample_strings(rng, &SOCIAL_PLATFORMS, n)
                    } else {
                        Vec::new()
                    },
                    monthly_posts: if has_digital { rng.gen_range(0..=30) } else { 0 },
                },
                created_at: Utc::now() - Duration::seconds(rng.gen_range(0..30 * 24 * 3600)),
            }
        })
    }

    /// Generate a synthetic bias report for a piece of content.
    pub fn bias_insight(&self, campaign_id: &str) -> BiasInsight {
        self.with_rng(|rng| {
            let count = rng.gen_range(1..=4);
            let biases: Vec<BiasDetection> = BiasCategory::ALL
                .choose_multiple(rng, count)
                .map(|&category| {
                    let template = bias_template(category);
                    BiasDetection {
                        category,
                        description: template.description.to_string(),
                        affected_text: template.affected_text.to_string(),
                        score: rng.gen_range(40..=95),
                        recommendation: template.recommendation.to_string(),
                        examples: template.examples.iter().map(|s| s.to_string()).collect(),
                    }
                })
                .collect();

            let overall_score = mean_score(&biases);
            let suggestions = build_suggestions(&biases);

            BiasInsight {
                id: Uuid::new_v4().to_string(),
                campaign_id: campaign_id.to_string(),
                detected_at: Utc::now(),
                overall_score,
                severity: Severity::from_score(overall_score),
                biases,
                suggestions,
                metadata: BiasMetadata {
                    model_version: "kolosal-bias-v2.1".to_string(),
                    confidence: round2(rng.gen_range(0.75..=0.99)),
                },
            }
        })
    }

    /// Generate the fixed set of tone-variant rewrites.
    pub fn copy_suggestion(&self, campaign_id: &str, language: Language) -> CopySuggestion {
        self.with_rng(|rng| {
            let original = original_copy(language);
            let suggestions = GENERATED_TONES
                .iter()
                .map(|&tone| CopyVariant {
                    id: Uuid::new_v4().to_string(),
                    text: rewrite(language, tone).to_string(),
                    language,
                    tone,
                    inclusivity_score: rng.gen_range(80..=99),
                    bias_score: rng.gen_range(5..=25),
                    engagement: Engagement {
                        predicted: round1(rng.gen_range(2.5..=8.5)),
                        confidence: round2(rng.gen_range(0.7..=0.95)),
                    },
                    highlights: tone_highlights(tone),
                })
                .collect();

            CopySuggestion {
                id: Uuid::new_v4().to_string(),
                campaign_id: campaign_id.to_string(),
                language,
                original: original.to_string(),
                suggestions,
                created_at: Utc::now(),
                metadata: CopyMetadata {
                    target_audience: target_audience(rng),
                    tone: *GENERATED_TONES.choose(rng).unwrap_or(&Tone::Friendly),
                    inclusivity_score: rng.gen_range(75..=98),
                },
            }
        })
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn full_name(rng: &mut StdRng) -> String {
    let first = FIRST_NAMES.choose(rng).unwrap_or(&FIRST_NAMES[0]);
    let family = FAMILY_NAMES.choose(rng).unwrap_or(&FAMILY_NAMES[0]);
    format!("{first} {family}")
}

fn business_name(rng: &mut StdRng, business_type: BusinessType) -> String {
    let prefix = name_prefixes(business_type)
        .choose(rng)
        .copied()
        .unwrap_or_default();
    // Token source mirrors the demo data: a person name, a city word, or
    // an adjective, picked uniformly.
    let token = match rng.gen_range(0..3) {
        0 => FIRST_NAMES.choose(rng).copied().unwrap_or_default(),
        1 => {
            let (city, _) = CITIES.choose(rng).copied().unwrap_or(CITIES[0]);
            city.split(' ').next().unwrap_or(city)
        }
        _ => NAME_TOKEN_ADJECTIVES.choose(rng).copied().unwrap_or_default(),
    };
    format!("{prefix} {token}").trim().to_string()
}

fn target_audience(rng: &mut StdRng) -> String {
    let group = AUDIENCE_GROUPS.choose(rng).unwrap_or(&AUDIENCE_GROUPS[0]);
    let ages = AUDIENCE_AGE_RANGES
        .choose(rng)
        .unwrap_or(&AUDIENCE_AGE_RANGES[0]);
    format!("{group} aged {ages}")
}

fn sample_strings(rng: &mut StdRng, pool: &[&str], count: usize) -> Vec<String> {
    pool.choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect()
}

/// Rounded mean of the detection scores; 0 for an empty slice.
pub fn mean_score(biases: &[BiasDetection]) -> u8 {
    if biases.is_empty() {
        return 0;
    }
    let sum: u32 = biases.iter().map(|b| u32::from(b.score)).sum();
    (f64::from(sum) / biases.len() as f64).round() as u8
}

/// Two generic tips plus one tip per detected category, deduplicated
/// preserving first occurrence.
pub fn build_suggestions(biases: &[BiasDetection]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tip in GENERIC_TIPS
        .iter()
        .copied()
        .chain(biases.iter().map(|b| category_tip(b.category)))
    {
        if !out.iter().any(|s| s == tip) {
            out.push(tip.to_string());
        }
    }
    out
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
