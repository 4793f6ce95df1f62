//! Property-based tests
//!
//! Property tests verify invariants that should hold for all inputs,
//! rather than testing specific cases.
//!
//! ## Test Modules
//!
//! - `normalize_props`: Tests for the response normalizer
//!   - Clamped scores always land in 0..=100
//!   - Fraction-scaled fields multiply by 100 before clamping
//!   - Canonical alias names win over synonyms in any payload
//!   - Missing fields always fall back to the documented defaults
//!
//! - `generator_props`: Tests for the mock data engine
//!   - Personas honor the documented range and pairing invariants
//!   - Same seed produces the same stream of records
//!   - Bias scores stay in band and severity matches the overall score
//!
//! - `validation_props`: Tests for request validation
//!   - Accepted pagination is always within bounds
//!   - Rejected input always carries at least one message
//!   - Content length limits are exact

mod generator_props;
mod normalize_props;
mod validation_props;
