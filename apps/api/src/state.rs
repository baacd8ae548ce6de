use std::sync::Arc;

use crate::screening::documents::DocumentReader;
use crate::screening::extractor::AttributeExtractor;
use crate::screening::scorer::Scorer;
use crate::store::ResultStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every handle is built once in `main` and shared by all requests.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable extractor. Default: `LlmAttributeExtractor`.
    pub extractor: Arc<dyn AttributeExtractor>,
    /// Pluggable scoring policy. Default: `BreadthScorer`, swap via SCORING_POLICY.
    pub scorer: Arc<dyn Scorer>,
    /// Postgres when DATABASE_URL is set, in-memory otherwise.
    pub store: Arc<dyn ResultStore>,
    pub documents: DocumentReader,
    /// Upper bound on request bodies, uploads included.
    pub max_upload_bytes: usize,
}
