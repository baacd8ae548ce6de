use anyhow::{anyhow, Context};
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::screening::ScreeningRow;
use crate::store::{ResultStore, ScreeningDocument, StoredScreening};

/// PostgreSQL-backed store. Rows are only ever inserted.
#[derive(Clone)]
pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn insert(&self, document: &ScreeningDocument) -> Result<StoredScreening, AppError> {
        let score = i32::try_from(document.score)
            .map_err(|_| anyhow!("score {} does not fit the score column", document.score))?;

        let row: ScreeningRow = sqlx::query_as(
            r#"
            INSERT INTO screenings (id, data, score, decision)
            VALUES ($1, $2, $3, $4)
            RETURNING id, data, score, decision, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Json(&document.data))
        .bind(score)
        .bind(document.decision.as_str())
        .fetch_one(&self.pool)
        .await?;

        info!("Stored screening {}", row.id);
        Ok(StoredScreening::try_from(row)?)
    }

    async fn list_recent(&self) -> Result<Vec<StoredScreening>, AppError> {
        let rows: Vec<ScreeningRow> = sqlx::query_as(
            "SELECT id, data, score, decision, created_at FROM screenings ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| StoredScreening::try_from(row).map_err(AppError::Internal))
            .collect()
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

impl TryFrom<ScreeningRow> for StoredScreening {
    type Error = anyhow::Error;

    fn try_from(row: ScreeningRow) -> anyhow::Result<Self> {
        let data = serde_json::from_value(row.data)
            .with_context(|| format!("screening {} has malformed data", row.id))?;
        let decision = row
            .decision
            .parse()
            .with_context(|| format!("screening {} has an unknown decision", row.id))?;
        Ok(StoredScreening {
            id: row.id,
            document: ScreeningDocument {
                data,
                score: u32::try_from(row.score.max(0)).unwrap_or(0),
                decision,
            },
            created_at: row.created_at,
        })
    }
}
