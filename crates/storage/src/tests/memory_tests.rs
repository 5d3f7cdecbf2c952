#![allow(clippy::unwrap_used, reason = "test code")]

use quotebook_core::{NewQuote, Quote};

use super::create_seeded_storage;
use crate::{MemoryStorage, QuoteStore};

fn quote(id: i64, author: &str, text: &str) -> Quote {
    Quote { id, author: author.to_owned(), quote: text.to_owned() }
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let storage = MemoryStorage::new();
    let first = storage.insert_quote(&NewQuote::new("A", "one")).await.unwrap();
    let second = storage.insert_quote(&NewQuote::new("B", "two")).await.unwrap();

    assert_eq!(first, quote(1, "A", "one"));
    assert_eq!(second, quote(2, "B", "two"));
}

#[tokio::test]
async fn test_get_all_on_empty_store() {
    let storage = MemoryStorage::new();
    assert!(storage.get_all_quotes().await.unwrap().is_empty());
    assert!(storage.is_empty().await);
}

#[tokio::test]
async fn test_get_all_returns_insertion_order() {
    let storage = create_seeded_storage(&[("A", "1"), ("B", "2"), ("C", "3")]).await;
    let ids: Vec<i64> = storage.get_all_quotes().await.unwrap().iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_filter_by_author_is_exact() {
    let storage = create_seeded_storage(&[("Ann", "a"), ("Bob", "b"), ("Ann", "c")]).await;

    let ann = storage.get_quotes_by_author("Ann").await.unwrap();
    assert_eq!(ann, vec![quote(1, "Ann", "a"), quote(3, "Ann", "c")]);

    assert!(storage.get_quotes_by_author("ann").await.unwrap().is_empty());
    assert!(storage.get_quotes_by_author("An").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let storage = create_seeded_storage(&[("A", "1"), ("B", "2")]).await;

    storage.delete_quote(2).await.unwrap();
    storage.delete_quote(2).await.unwrap();
    storage.delete_quote(999).await.unwrap();

    assert_eq!(storage.get_all_quotes().await.unwrap(), vec![quote(1, "A", "1")]);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let storage = create_seeded_storage(&[("A", "1"), ("B", "2")]).await;
    storage.delete_quote(2).await.unwrap();

    let next = storage.insert_quote(&NewQuote::new("C", "3")).await.unwrap();
    assert_eq!(next.id, 3);
    assert_eq!(storage.len().await, 2);
}
