//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use quotebook_core::{NewQuote, Quote};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::pg_storage::PgStorage;
use crate::traits::QuoteStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <PgStorage as QuoteStore>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as QuoteStore>::$method(s, $($arg),*).await,
        }
    };
}

/// Backend selected at startup by the `serve` command.
#[derive(Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    /// Release backend resources. No-op for the in-memory backend.
    pub async fn close(&self) {
        if let Self::Postgres(pg) = self {
            pg.close().await;
        }
    }
}

#[async_trait]
impl QuoteStore for StorageBackend {
    async fn insert_quote(&self, input: &NewQuote) -> Result<Quote, StorageError> {
        dispatch!(self, insert_quote(input))
    }

    async fn get_all_quotes(&self) -> Result<Vec<Quote>, StorageError> {
        dispatch!(self, get_all_quotes())
    }

    async fn get_quotes_by_author(&self, author: &str) -> Result<Vec<Quote>, StorageError> {
        dispatch!(self, get_quotes_by_author(author))
    }

    async fn delete_quote(&self, id: i64) -> Result<(), StorageError> {
        dispatch!(self, delete_quote(id))
    }
}
