//! Typed API client
//!
//! A thin reqwest wrapper over the hub API for dashboards and scripts.
//! Responses are unwrapped from the common envelope; non-2xx responses
//! surface the status and raw body instead of a half-parsed value.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::core::model::{
    BiasInsight, BusinessType, CampaignPersona, CopySuggestion, Language, PlatformStats, Tone,
};

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("API error {status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response envelope carried no data")]
    MissingData,
}

pub type Result<T> = std::result::Result<T, ApiClientError>;

/// `POST /api/campaigns` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub business_name: String,
    pub business_type: BusinessType,
    pub target_audience: String,
    pub marketing_goals: Vec<String>,
}

/// `POST /api/bias` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasCheckRequest {
    pub content: String,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
}

/// `POST /api/copy` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCopyRequest {
    pub prompt: String,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
}

/// One page of campaign personas with its pagination cursor data.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPage {
    pub data: Vec<CampaignPersona>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub has_more: bool,
}

/// Typed client over the hub API.
pub struct HubClient {
    client: reqwest::Client,
    base_url: String,
}

impl HubClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health` — returned as-is, no envelope.
    pub async fn health(&self) -> Result<Value> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::read_ok(response).await
    }

    /// `GET /api/campaigns?page=..&limit=..[&freeze=true]`.
    pub async fn campaigns(&self, page: usize, limit: usize, freeze: bool) -> Result<CampaignPage> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if freeze {
            query.push(("freeze", "true".to_string()));
        }
        let response = self
            .client
            .get(format!("{}/api/campaigns", self.base_url))
            .query(&query)
            .send()
            .await?;
        // Pagination fields sit beside `data`, so deserialize the whole body.
        let body = Self::read_ok(response).await?;
        serde_json::from_value(body).map_err(|_| ApiClientError::MissingData)
    }

    /// `GET /api/campaigns/:id`.
    pub async fn campaign(&self, id: &str) -> Result<CampaignPersona> {
        let response = self
            .client
            .get(format!("{}/api/campaigns/{id}", self.base_url))
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    /// `POST /api/campaigns`.
    pub async fn create_campaign(&self, req: &CreateCampaignRequest) -> Result<CampaignPersona> {
        let response = self
            .client
            .post(format!("{}/api/campaigns", self.base_url))
            .json(req)
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    /// `POST /api/bias`.
    pub async fn check_bias(&self, req: &BiasCheckRequest) -> Result<BiasInsight> {
        let response = self
            .client
            .post(format!("{}/api/bias", self.base_url))
            .json(req)
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    /// `POST /api/copy`.
    pub async fn generate_copy(&self, req: &GenerateCopyRequest) -> Result<CopySuggestion> {
        let response = self
            .client
            .post(format!("{}/api/copy", self.base_url))
            .json(req)
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    /// `GET /api/stats`.
    pub async fn stats(&self) -> Result<PlatformStats> {
        let response = self
            .client
            .get(format!("{}/api/stats", self.base_url))
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    async fn read_ok(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiClientError::Http { status, body });
        }
        Ok(response.json::<Value>().await?)
    }

    async fn unwrap_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let mut body = Self::read_ok(response).await?;
        let data = body
            .get_mut("data")
            .map(Value::take)
            .ok_or(ApiClientError::MissingData)?;
        serde_json::from_value(data).map_err(|_| ApiClientError::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_campaigns_parses_pagination_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/campaigns"))
            .and(query_param("page", "2"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": [],
                "page": 2,
                "limit": 5,
                "total": 40,
                "hasMore": true,
                "timestamp": "2026-01-01T00:00:00Z",
            })))
            .mount(&server)
            .await;

        let client = HubClient::new(server.uri());
        let page = client.campaigns(2, 5, false).await.unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total, 40);
        assert!(page.has_more);
        assert!(page.data.is_empty());
    }

    #[tokio::test]
    async fn test_non_2xx_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/campaigns/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
            .mount(&server)
            .await;

        let client = HubClient::new(server.uri());
        let err = client.campaign("missing").await.unwrap_err();
        match err {
            ApiClientError::Http { status, body } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, "nope");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_envelope_without_data_is_missing_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "timestamp": "2026-01-01T00:00:00Z",
            })))
            .mount(&server)
            .await;

        let client = HubClient::new(server.uri());
        let err = client.stats().await.unwrap_err();
        assert!(matches!(err, ApiClientError::MissingData));
    }

    #[tokio::test]
    async fn test_create_campaign_sends_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/campaigns"))
            .and(body_partial_json(serde_json::json!({
                "businessName": "Warung Sinar",
                "businessType": "Warung",
            })))
            .respond_with(ResponseTemplate::new(404).set_body_string(""))
            .expect(1)
            .mount(&server)
            .await;

        let client = HubClient::new(server.uri());
        let req = CreateCampaignRequest {
            business_name: "Warung Sinar".to_string(),
            business_type: BusinessType::Warung,
            target_audience: "Keluarga muda".to_string(),
            marketing_goals: vec!["Meningkatkan penjualan".to_string()],
        };
        let _ = client.create_campaign(&req).await;
    }
}
