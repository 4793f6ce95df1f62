use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Placeholder value shipped in sample env files; treated as no key.
const PLACEHOLDER_API_KEY: &str = "your_kolosal_api_key_here";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub kolosal: KolosalConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listening port for the API.
    pub port: u16,
}

/// External Kolosal service configuration. Live mode requires both the
/// URL and a real key; anything less keeps the service mock-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KolosalConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    /// Bias-check call budget in milliseconds.
    pub bias_timeout_ms: u64,
    /// Copy-generation call budget in milliseconds (generation is slower).
    pub copy_timeout_ms: u64,
    /// Platform-analytics call budget in milliseconds.
    pub stats_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            kolosal: KolosalConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3001 }
    }
}

impl Default for KolosalConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            bias_timeout_ms: 10_000,
            copy_timeout_ms: 15_000,
            stats_timeout_ms: 10_000,
        }
    }
}

impl KolosalConfig {
    /// True when both the URL and a non-placeholder key are present.
    pub fn is_configured(&self) -> bool {
        let has_key = self
            .api_key
            .as_deref()
            .is_some_and(|k| !k.is_empty() && k != PLACEHOLDER_API_KEY);
        has_key && self.api_url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

impl AppConfig {
    /// Load configuration from `<config_dir>/inclusive-hub/config.toml`,
    /// then apply `PORT`, `KOLOSAL_API_URL` and `KOLOSAL_API_KEY` from the
    /// environment. Returns `Default` if the file is missing or
    /// unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        };
        config.apply_env();
        config
    }

    /// Overlay the recognized environment variables.
    pub fn apply_env(&mut self) {
        if let Ok(port) = env::var("PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring unparseable PORT value: {port}"),
            }
        }
        if let Ok(url) = env::var("KOLOSAL_API_URL") {
            if !url.is_empty() {
                self.kolosal.api_url = Some(url);
            }
        }
        if let Ok(key) = env::var("KOLOSAL_API_KEY") {
            if !key.is_empty() {
                self.kolosal.api_key = Some(key);
            }
        }
    }

    /// `live` when the external service is usable, else `mock`.
    pub fn mode(&self) -> &'static str {
        if self.kolosal.is_configured() {
            "live"
        } else {
            "mock"
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("inclusive-hub").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
