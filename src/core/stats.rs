//! Platform Statistics
//!
//! Local aggregate computation over the in-memory persona list. Rebuilt
//! on every request; the inclusivity average and bias-count estimate are
//! fixed demo constants, not derived values.

use indexmap::IndexMap;

use super::model::{CampaignPersona, PlatformStats};

/// Fixed demo average shown when no live analytics are available.
pub const AVERAGE_INCLUSIVITY_SCORE: f64 = 87.5;

/// Fixed per-campaign bias estimate used for the demo total.
pub const BIASES_PER_CAMPAIGN: f64 = 2.3;

/// Recompute platform stats over a persona snapshot.
pub fn compute(personas: &[CampaignPersona]) -> PlatformStats {
    let mut business_type_distribution: IndexMap<String, u64> = IndexMap::new();
    let mut city_distribution: IndexMap<String, u64> = IndexMap::new();

    for persona in personas {
        *business_type_distribution
            .entry(persona.business_type.label().to_string())
            .or_insert(0) += 1;
        *city_distribution.entry(persona.city.clone()).or_insert(0) += 1;
    }

    PlatformStats {
        total_campaigns: personas.len() as u64,
        business_type_distribution,
        city_distribution,
        average_inclusivity_score: AVERAGE_INCLUSIVITY_SCORE,
        total_biases_detected: personas.len() as f64 * BIASES_PER_CAMPAIGN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::MockDataEngine;

    #[test]
    fn test_empty_store_yields_zeroes() {
        let stats = compute(&[]);
        assert_eq!(stats.total_campaigns, 0);
        assert!(stats.business_type_distribution.is_empty());
        assert!(stats.city_distribution.is_empty());
        assert!((stats.total_biases_detected - 0.0).abs() < f64::EPSILON);
        assert!((stats.average_inclusivity_score - AVERAGE_INCLUSIVITY_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distributions_sum_to_total() {
        let engine = MockDataEngine::seeded(41);
        let personas: Vec<_> = (0..40).map(|_| engine.persona()).collect();
        let stats = compute(&personas);

        assert_eq!(stats.total_campaigns, 40);
        let by_type: u64 = stats.business_type_distribution.values().sum();
        let by_city: u64 = stats.city_distribution.values().sum();
        assert_eq!(by_type, 40);
        assert_eq!(by_city, 40);
        assert!((stats.total_biases_detected - 92.0).abs() < 1e-9);
    }
}
