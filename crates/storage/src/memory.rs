//! In-process quote store.
//!
//! Same contract as [`crate::PgStorage`]: ids start at 1, grow monotonically
//! and are never reused after a delete.

use async_trait::async_trait;
use quotebook_core::{NewQuote, Quote};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::QuoteStore;

#[derive(Debug, Default)]
struct MemoryTable {
    rows: Vec<Quote>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    table: RwLock<MemoryTable>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl QuoteStore for MemoryStorage {
    async fn insert_quote(&self, input: &NewQuote) -> Result<Quote, StorageError> {
        let mut table = self.table.write().await;
        table.last_id = table.last_id.saturating_add(1);
        let quote = input.clone().into_quote(table.last_id);
        // Rows stay sorted by id because ids only grow.
        table.rows.push(quote.clone());
        Ok(quote)
    }

    async fn get_all_quotes(&self) -> Result<Vec<Quote>, StorageError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn get_quotes_by_author(&self, author: &str) -> Result<Vec<Quote>, StorageError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().filter(|q| q.author == author).cloned().collect())
    }

    async fn delete_quote(&self, id: i64) -> Result<(), StorageError> {
        self.table.write().await.rows.retain(|q| q.id != id);
        Ok(())
    }
}
