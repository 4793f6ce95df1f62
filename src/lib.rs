//! Inclusive Hub — an inclusive-marketing API for Indonesian MSMEs.
//!
//! Serves synthetic campaign personas, bias analysis of marketing copy,
//! and AI copy-variant generation. All analysis endpoints work offline
//! against a seeded mock engine; when a Kolosal API key is configured
//! the live service is used with transparent fallback to mock data.

pub mod client;
pub mod config;
pub mod core;
pub mod server;

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests;
