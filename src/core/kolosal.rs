//! Kolosal Service Client
//!
//! Thin reqwest wrapper over the optional external bias/copy-generation
//! API. Responses are decoded to `serde_json::Value` and handed to the
//! normalizer; callers treat every error here as a signal to fall back to
//! the mock engine. Calls are time-bounded and never retried.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use super::model::{Language, Tone};
use crate::config::KolosalConfig;

#[derive(Debug, Error)]
pub enum KolosalError {
    #[error("Kolosal API error: status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Kolosal request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, KolosalError>;

/// Client for the configured Kolosal deployment.
pub struct KolosalClient {
    client: Client,
    base_url: String,
    api_key: String,
    bias_timeout: Duration,
    copy_timeout: Duration,
    stats_timeout: Duration,
}

impl KolosalClient {
    /// Build a client when the config carries a usable URL and key;
    /// `None` keeps the service in mock-only mode.
    pub fn from_config(config: &KolosalConfig) -> Option<Self> {
        if !config.is_configured() {
            return None;
        }
        let base_url = config.api_url.clone()?;
        let api_key = config.api_key.clone()?;

        Some(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            bias_timeout: Duration::from_millis(config.bias_timeout_ms),
            copy_timeout: Duration::from_millis(config.copy_timeout_ms),
            stats_timeout: Duration::from_millis(config.stats_timeout_ms),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST {base}/bias-check`.
    pub async fn check_bias(
        &self,
        content: &str,
        language: Language,
        campaign_id: Option<&str>,
    ) -> Result<Value> {
        let body = serde_json::json!({
            "content": content,
            "language": language,
            "campaignId": campaign_id,
        });
        self.post("bias-check", &body, self.bias_timeout).await
    }

    /// `POST {base}/generate-copy`.
    pub async fn generate_copy(
        &self,
        prompt: &str,
        language: Language,
        tone: Option<Tone>,
        campaign_id: Option<&str>,
    ) -> Result<Value> {
        let body = serde_json::json!({
            "prompt": prompt,
            "language": language,
            "tone": tone,
            "campaignId": campaign_id,
        });
        self.post("generate-copy", &body, self.copy_timeout).await
    }

    /// `GET {base}/analytics/platform?timeframe=30d`.
    pub async fn platform_stats(&self) -> Result<Value> {
        let response = self
            .client
            .get(format!("{}/analytics/platform", self.base_url))
            .query(&[("timeframe", "30d")])
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.stats_timeout)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post(&self, path: &str, body: &Value, timeout: Duration) -> Result<Value> {
        let response = self
            .client
            .post(format!("{}/{path}", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(body)
            .timeout(timeout)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KolosalError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KolosalConfig;

    fn live_config(url: &str) -> KolosalConfig {
        KolosalConfig {
            api_url: Some(url.to_string()),
            api_key: Some("kolosal-test-key".to_string()),
            ..KolosalConfig::default()
        }
    }

    #[test]
    fn test_from_config_requires_url_and_key() {
        assert!(KolosalClient::from_config(&KolosalConfig::default()).is_none());

        let mut config = live_config("https://api.kolosal.test/v1");
        config.api_key = None;
        assert!(KolosalClient::from_config(&config).is_none());

        config.api_key = Some("your_kolosal_api_key_here".to_string());
        assert!(KolosalClient::from_config(&config).is_none());
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let client = KolosalClient::from_config(&live_config("https://api.kolosal.test/v1/"))
            .expect("configured client");
        assert_eq!(client.base_url(), "https://api.kolosal.test/v1");
    }

    #[tokio::test]
    async fn test_non_2xx_surfaces_status_and_body() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/bias-check"))
            .respond_with(wiremock::ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client =
            KolosalClient::from_config(&live_config(&server.uri())).expect("configured client");
        let err = client
            .check_bias("some copy", Language::En, None)
            .await
            .unwrap_err();
        match err {
            KolosalError::Api { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_decodes_json_and_sends_bearer() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/generate-copy"))
            .and(wiremock::matchers::header(
                "Authorization",
                "Bearer kolosal-test-key",
            ))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "variants": [] })),
            )
            .mount(&server)
            .await;

        let client =
            KolosalClient::from_config(&live_config(&server.uri())).expect("configured client");
        let value = client
            .generate_copy("prompt", Language::En, Some(Tone::Friendly), Some("c-1"))
            .await
            .expect("success");
        assert!(value["variants"].is_array());
    }
}
