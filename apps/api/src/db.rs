use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const CREATE_SCREENINGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS screenings (
    id          UUID PRIMARY KEY,
    data        JSONB NOT NULL,
    score       INTEGER NOT NULL,
    decision    TEXT NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the tables the screener needs if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_SCREENINGS_TABLE).execute(pool).await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS screenings_created_at_idx ON screenings (created_at DESC)")
        .execute(pool)
        .await?;
    info!("Database schema ready");
    Ok(())
}
