use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::store::{ResultStore, ScreeningDocument, StoredScreening};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryResultStore {
    entries: RwLock<Vec<StoredScreening>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultStore for MemoryResultStore {
    async fn insert(&self, document: &ScreeningDocument) -> Result<StoredScreening, AppError> {
        let stored = StoredScreening {
            id: Uuid::new_v4(),
            document: document.clone(),
            created_at: Utc::now(),
        };
        self.entries.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_recent(&self) -> Result<Vec<StoredScreening>, AppError> {
        // insertion order is chronological
        Ok(self.entries.read().await.iter().rev().cloned().collect())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
