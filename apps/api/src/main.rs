mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod render;
mod routes;
mod screening;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::screening::documents::DocumentReader;
use crate::screening::extractor::LlmAttributeExtractor;
use crate::screening::scorer::Scorer;
use crate::state::AppState;
use crate::store::{MemoryResultStore, PgResultStore, ResultStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume screener v{}", env!("CARGO_PKG_VERSION"));

    // Initialize result store
    let store: Arc<dyn ResultStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Arc::new(PgResultStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; screening results are kept in memory only");
            Arc::new(MemoryResultStore::new())
        }
    };
    info!("Result store: {}", store.backend());

    // Initialize LLM client
    let llm = LlmClient::new(
        config.llm_api_key.clone(),
        config.llm_base_url.clone(),
        config.llm_model.clone(),
    )
    .context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());

    let scorer: Arc<dyn Scorer> = Arc::from(config.scoring_policy.scorer());
    info!("Scoring policy: {}", scorer.name());

    let state = AppState {
        extractor: Arc::new(LlmAttributeExtractor(llm)),
        scorer,
        store,
        documents: DocumentReader::new(config.tesseract_cmd.clone()),
        max_upload_bytes: config.max_upload_bytes,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
