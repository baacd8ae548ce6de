//! Fixtures shared by the screening tests.

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;

use crate::errors::AppError;
use crate::screening::attributes::AttributeRecord;
use crate::screening::documents::DocumentReader;
use crate::screening::extractor::{parse_reply, AttributeExtractor};
use crate::screening::scorer::BreadthScorer;
use crate::state::AppState;
use crate::store::{MemoryResultStore, ResultStore, ScreeningDocument, StoredScreening};

pub const MISSING_OCR_BINARY: &str = "screener-test-no-such-ocr-binary";

/// Answers every request with the same canned model reply.
pub struct CannedExtractor(pub String);

#[async_trait]
impl AttributeExtractor for CannedExtractor {
    async fn extract(&self, _resume_text: &str) -> Result<AttributeRecord, AppError> {
        parse_reply(&self.0)
    }
}

/// Fails every extraction the way an unreachable model would.
pub struct OfflineExtractor;

#[async_trait]
impl AttributeExtractor for OfflineExtractor {
    async fn extract(&self, _resume_text: &str) -> Result<AttributeRecord, AppError> {
        Err(AppError::Llm("connection refused".to_string()))
    }
}

/// Rejects every write and read.
pub struct OfflineStore;

#[async_trait]
impl ResultStore for OfflineStore {
    async fn insert(&self, _document: &ScreeningDocument) -> Result<StoredScreening, AppError> {
        Err(AppError::Internal(anyhow!("store offline")))
    }

    async fn list_recent(&self) -> Result<Vec<StoredScreening>, AppError> {
        Err(AppError::Internal(anyhow!("store offline")))
    }

    fn backend(&self) -> &'static str {
        "offline"
    }
}

fn state(extractor: Arc<dyn AttributeExtractor>, store: Arc<dyn ResultStore>) -> AppState {
    AppState {
        extractor,
        scorer: Arc::new(BreadthScorer),
        store,
        documents: DocumentReader::new(MISSING_OCR_BINARY),
        max_upload_bytes: 64 * 1024,
    }
}

/// State whose extractor always returns `reply`, backed by a fresh memory store.
pub fn state_with_reply(reply: &str) -> (AppState, Arc<MemoryResultStore>) {
    let store = Arc::new(MemoryResultStore::new());
    let state = state(Arc::new(CannedExtractor(reply.to_string())), store.clone());
    (state, store)
}

pub fn failing_store_state(reply: &str) -> AppState {
    state(Arc::new(CannedExtractor(reply.to_string())), Arc::new(OfflineStore))
}

pub fn offline_extractor_state() -> (AppState, Arc<MemoryResultStore>) {
    let store = Arc::new(MemoryResultStore::new());
    let state = state(Arc::new(OfflineExtractor), store.clone());
    (state, store)
}
