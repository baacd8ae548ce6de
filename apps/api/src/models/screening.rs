use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the `screenings` table.
#[derive(Debug, Clone, FromRow)]
pub struct ScreeningRow {
    pub id: Uuid,
    pub data: Value,
    pub score: i32,
    pub decision: String,
    pub created_at: DateTime<Utc>,
}
