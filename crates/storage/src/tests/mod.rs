//! Test utilities and module declarations for storage tests.

use crate::{MemoryStorage, QuoteStore};
use quotebook_core::NewQuote;

#[allow(clippy::unwrap_used, reason = "test code")]
pub async fn create_seeded_storage(rows: &[(&str, &str)]) -> MemoryStorage {
    let storage = MemoryStorage::new();
    for (author, quote) in rows {
        storage.insert_quote(&NewQuote::new(*author, *quote)).await.unwrap();
    }
    storage
}

mod memory_tests;
