//! HTTP Handlers
//!
//! Route handlers for the campaign, bias-check, copy-generation, and
//! stats endpoints. Every handler validates first, then computes locally
//! or delegates to the Kolosal client; upstream failures are logged and
//! transparently replaced by mock data, so clients only ever see an
//! error for their own bad input.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::core::normalize::{normalize_bias, normalize_copy, normalize_stats};
use crate::core::validation::{
    parse_bias_check, parse_copy_request, parse_create_campaign, parse_pagination,
};
use crate::core::{model::PlatformStats, stats};

use super::envelope::{created, failure, paginated, success, validation_failure};
use super::AppState;

const DEFAULT_PAGE_LIMIT: usize = 12;

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let key_status = if state.config.kolosal.is_configured() {
        "configured"
    } else {
        "missing"
    };
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now(),
        "kolosalApiKey": key_status,
        "kolosalApiUrl": state.config.kolosal.api_url,
        "mode": state.config.mode(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    page: Option<String>,
    limit: Option<String>,
    freeze: Option<String>,
}

/// `GET /api/campaigns`
pub async fn list_campaigns(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let pagination = match parse_pagination(
        query.page.as_deref(),
        query.limit.as_deref(),
        DEFAULT_PAGE_LIMIT,
    ) {
        Ok(p) => p,
        Err(errors) => return validation_failure(errors),
    };
    let freeze = query.freeze.as_deref() == Some("true");

    let page = state
        .store
        .page(pagination.page, pagination.limit, freeze)
        .await;
    paginated(
        &page.items,
        pagination.page,
        pagination.limit,
        page.total,
        page.has_more,
    )
}

/// `GET /api/campaigns/:id`
pub async fn get_campaign(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.store.get(&id).await {
        Some(persona) => success(persona),
        None => failure(StatusCode::NOT_FOUND, "Campaign not found"),
    }
}

/// `POST /api/campaigns`
pub async fn create_campaign(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return failure(StatusCode::BAD_REQUEST, "Invalid JSON body");
    };
    let input = match parse_create_campaign(&body) {
        Ok(input) => input,
        Err(errors) => return validation_failure(errors),
    };

    let mut persona = state.engine.persona();
    persona.business_name = input.business_name;
    persona.set_business_type(input.business_type);
    persona.target_audience = input.target_audience;
    persona.marketing_goals = input.marketing_goals;

    state.store.insert(persona.clone()).await;
    tracing::info!("Created campaign persona {}", persona.id);
    created(persona, "Campaign created successfully")
}

/// `POST /api/bias`
pub async fn check_bias(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return failure(StatusCode::BAD_REQUEST, "Invalid JSON body");
    };
    let input = match parse_bias_check(&body) {
        Ok(input) => input,
        Err(errors) => return validation_failure(errors),
    };
    let campaign_id = input.campaign_id.as_deref();

    let insight = match &state.kolosal {
        Some(client) => {
            match client
                .check_bias(&input.content, input.language, campaign_id)
                .await
            {
                Ok(raw) => normalize_bias(&raw, campaign_id),
                Err(err) => {
                    tracing::warn!("Kolosal bias API failed, falling back to mock: {err}");
                    state.engine.bias_insight(campaign_id.unwrap_or("default"))
                }
            }
        }
        None => state.engine.bias_insight(campaign_id.unwrap_or("default")),
    };

    success(insight)
}

/// `POST /api/copy`
pub async fn generate_copy(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return failure(StatusCode::BAD_REQUEST, "Invalid JSON body");
    };
    let input = match parse_copy_request(&body) {
        Ok(input) => input,
        Err(errors) => return validation_failure(errors),
    };
    let campaign_id = input.campaign_id.as_deref();

    let mut suggestion = match &state.kolosal {
        Some(client) => {
            match client
                .generate_copy(&input.prompt, input.language, input.tone, campaign_id)
                .await
            {
                Ok(raw) => normalize_copy(&raw, campaign_id, input.language, input.tone),
                Err(err) => {
                    tracing::warn!("Kolosal copy API failed, falling back to mock: {err}");
                    state
                        .engine
                        .copy_suggestion(campaign_id.unwrap_or("default"), input.language)
                }
            }
        }
        None => state
            .engine
            .copy_suggestion(campaign_id.unwrap_or("default"), input.language),
    };

    if let Some(tone) = input.tone {
        suggestion.retain_tone(tone);
    }

    success(suggestion)
}

/// `GET /api/stats`
pub async fn platform_stats(State(state): State<Arc<AppState>>) -> Response {
    let stats = match &state.kolosal {
        Some(client) => match client.platform_stats().await {
            Ok(raw) => normalize_stats(&raw),
            Err(err) => {
                tracing::warn!("Kolosal stats API failed, falling back to local: {err}");
                local_stats(&state).await
            }
        },
        None => local_stats(&state).await,
    };
    success(stats)
}

async fn local_stats(state: &AppState) -> PlatformStats {
    stats::compute(&state.store.snapshot().await)
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    failure(StatusCode::NOT_FOUND, "Not found")
}
