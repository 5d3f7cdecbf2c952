//! QuoteStore implementation for PgStorage.

use async_trait::async_trait;
use quotebook_core::{NewQuote, Quote};

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::QuoteStore;

// `id` is SERIAL (int4); widen so rows decode into `Quote::id: i64`.
const INSERT_QUOTE: &str = "INSERT INTO quotes (author, quote) VALUES ($1, $2)
     RETURNING id::BIGINT AS id, author, quote";

const SELECT_ALL_QUOTES: &str =
    "SELECT id::BIGINT AS id, author, quote FROM quotes ORDER BY id ASC";

const SELECT_QUOTES_BY_AUTHOR: &str =
    "SELECT id::BIGINT AS id, author, quote FROM quotes WHERE author = $1 ORDER BY id ASC";

const DELETE_QUOTE: &str = "DELETE FROM quotes WHERE id = $1";

#[async_trait]
impl QuoteStore for PgStorage {
    async fn insert_quote(&self, input: &NewQuote) -> Result<Quote, StorageError> {
        sqlx::query_as::<_, Quote>(INSERT_QUOTE)
            .bind(&input.author)
            .bind(&input.quote)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)
    }

    async fn get_all_quotes(&self) -> Result<Vec<Quote>, StorageError> {
        sqlx::query_as::<_, Quote>(SELECT_ALL_QUOTES)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)
    }

    async fn get_quotes_by_author(&self, author: &str) -> Result<Vec<Quote>, StorageError> {
        sqlx::query_as::<_, Quote>(SELECT_QUOTES_BY_AUTHOR)
            .bind(author)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)
    }

    async fn delete_quote(&self, id: i64) -> Result<(), StorageError> {
        let result = sqlx::query(DELETE_QUOTE).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            tracing::debug!(id, "delete of missing quote");
        }
        Ok(())
    }
}
