mod config;
mod errors;
mod ingest;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::ingest::extractor::FileTextExtractor;
use crate::routes::build_router;
use crate::scoring::vocabulary::Vocabulary;
use crate::scoring::AtsEngine;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize scoring engine (built-in vocabulary unless ATS_VOCABULARY_PATH is set)
    let vocabulary = match &config.vocabulary_path {
        Some(path) => {
            info!("Loading vocabulary from {}", path.display());
            Vocabulary::load(path)?
        }
        None => Vocabulary::default(),
    };
    let engine = Arc::new(AtsEngine::new(vocabulary));
    info!(
        "Scoring engine initialized ({} stopwords, {} required sections)",
        engine.vocabulary().stopwords.len(),
        engine.vocabulary().required_sections.len()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        engine,
        extractor: Arc::new(FileTextExtractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
