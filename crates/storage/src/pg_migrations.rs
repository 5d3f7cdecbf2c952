//! PostgreSQL schema migrations for quotebook storage.

use sqlx::PgPool;

use crate::error::StorageError;

/// Create the `quotes` table and its author index if they do not exist.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quotes (
            id SERIAL PRIMARY KEY,
            author TEXT NOT NULL,
            quote TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(format!("create quotes table: {e}")))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_quotes_author ON quotes (author)")
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration(format!("create author index: {e}")))?;

    tracing::debug!("PostgreSQL migrations applied");
    Ok(())
}
