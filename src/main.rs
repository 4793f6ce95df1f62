use std::sync::Arc;

use inclusive_hub::config::AppConfig;
use inclusive_hub::core::generator::{MockDataEngine, DEFAULT_SEED};
use inclusive_hub::core::logging;
use inclusive_hub::server::{self, AppState};

const SEED_PERSONAS: usize = 50;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = AppConfig::load();
    tracing::info!(
        "{} v{} starting in {} mode",
        inclusive_hub::NAME,
        inclusive_hub::VERSION,
        config.mode()
    );

    let engine = MockDataEngine::seeded(DEFAULT_SEED);
    let state = Arc::new(AppState::new(config, engine));

    for _ in 0..SEED_PERSONAS {
        let persona = state.engine.persona();
        state.store.insert(persona).await;
    }
    tracing::info!("Seeded {} campaign personas", state.store.len().await);

    server::serve(state).await
}
