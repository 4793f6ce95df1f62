//! Crate-internal test suites.
//!
//! Inline `#[cfg(test)]` modules next to each source file cover the
//! concrete cases; the `property` tree holds proptest invariants that
//! should hold for all inputs.

mod property;
