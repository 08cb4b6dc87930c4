use std::sync::Arc;

use crate::config::Config;
use crate::ingest::extractor::TextExtractor;
use crate::scoring::AtsEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Scoring engine built once from the configured vocabulary.
    pub engine: Arc<AtsEngine>,
    /// Pluggable text extractor. Default: FileTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
