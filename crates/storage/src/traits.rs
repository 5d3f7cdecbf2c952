//! Storage backend trait abstraction
//!
//! The HTTP layer depends only on [`QuoteStore`], so tests can swap in a fake.

use async_trait::async_trait;
use quotebook_core::{NewQuote, Quote};

use crate::error::StorageError;

/// Quote persistence operations.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Insert a quote and return it with its assigned id.
    async fn insert_quote(&self, input: &NewQuote) -> Result<Quote, StorageError>;

    /// All quotes in ascending id order. Empty table yields an empty vec.
    async fn get_all_quotes(&self) -> Result<Vec<Quote>, StorageError>;

    /// Quotes whose author equals `author` exactly (case-sensitive), ascending id.
    async fn get_quotes_by_author(&self, author: &str) -> Result<Vec<Quote>, StorageError>;

    /// Delete by id. A missing id is not an error.
    async fn delete_quote(&self, id: i64) -> Result<(), StorageError>;
}
