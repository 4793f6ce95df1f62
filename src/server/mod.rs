//! HTTP Server
//!
//! Axum router and shared application state. The server exposes the
//! campaign CRUD surface, bias checking, copy generation, and platform
//! stats, all wrapped in the common response envelope.

pub mod envelope;
pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;
use crate::core::generator::MockDataEngine;
use crate::core::kolosal::KolosalClient;
use crate::core::store::PersonaStore;

/// Shared state for all handlers.
pub struct AppState {
    pub config: AppConfig,
    pub engine: MockDataEngine,
    pub store: PersonaStore,
    pub kolosal: Option<KolosalClient>,
}

impl AppState {
    pub fn new(config: AppConfig, engine: MockDataEngine) -> Self {
        let kolosal = KolosalClient::from_config(&config.kolosal);
        Self {
            config,
            engine,
            store: PersonaStore::new(),
            kolosal,
        }
    }
}

/// Build the application router with CORS enabled for the dashboard.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/campaigns",
            get(handlers::list_campaigns).post(handlers::create_campaign),
        )
        .route("/api/campaigns/:id", get(handlers::get_campaign))
        .route("/api/bias", post(handlers::check_bias))
        .route("/api/copy", post(handlers::generate_copy))
        .route("/api/stats", get(handlers::platform_stats))
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let port = state.config.server.port;
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Listening on http://0.0.0.0:{port}");
    axum::serve(listener, router).await?;
    Ok(())
}
