//! Result storage: append-only persistence of screening outcomes.
//!
//! `AppState` holds an `Arc<dyn ResultStore>`: `PgResultStore` when
//! `DATABASE_URL` is set, otherwise `MemoryResultStore`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::attributes::NormalizedAttributes;
use crate::screening::scorer::{Decision, ScoreResult};

pub mod memory;
pub mod postgres;

pub use memory::MemoryResultStore;
pub use postgres::PgResultStore;

/// What gets persisted for one screened resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningDocument {
    pub data: NormalizedAttributes,
    pub score: u32,
    pub decision: Decision,
}

impl ScreeningDocument {
    pub fn new(data: NormalizedAttributes, result: ScoreResult) -> Self {
        Self {
            data,
            score: result.score,
            decision: result.decision,
        }
    }
}

/// A persisted document with its store-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredScreening {
    pub id: Uuid,
    #[serde(flatten)]
    pub document: ScreeningDocument,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persists the document and returns it with its assigned id.
    async fn insert(&self, document: &ScreeningDocument) -> Result<StoredScreening, AppError>;

    /// All stored screenings, newest first.
    async fn list_recent(&self) -> Result<Vec<StoredScreening>, AppError>;

    /// Short identifier for logs.
    fn backend(&self) -> &'static str;
}
