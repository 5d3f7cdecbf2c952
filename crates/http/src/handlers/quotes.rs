use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use rand::seq::SliceRandom;
use std::sync::Arc;

use quotebook_core::{NewQuote, Quote};

use crate::api_error::ApiError;
use crate::query_types::AuthorQuery;
use crate::response_types::DeleteResponse;
use crate::AppState;

pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewQuote>, JsonRejection>,
) -> Result<Json<Quote>, ApiError> {
    let Json(input) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected create body");
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let quote = state.store.insert_quote(&input).await?;
    tracing::info!(id = quote.id, author = %quote.author, "quote created");
    Ok(Json(quote))
}

/// Query pairs are extracted as a list so repeated or unknown keys never reject.
pub async fn get_quotes(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let query = AuthorQuery::from_pairs(pairs);
    let quotes = match query.filter() {
        Some(author) => state.store.get_quotes_by_author(author).await?,
        None => state.store.get_all_quotes().await?,
    };
    Ok(Json(quotes))
}

pub async fn random_quote(State(state): State<Arc<AppState>>) -> Result<Json<Quote>, ApiError> {
    let quotes = state.store.get_all_quotes().await?;
    quotes
        .choose(&mut rand::thread_rng())
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("no quotes available".to_owned()))
}

pub async fn delete_quote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_quote_id(&id)?;
    state.store.delete_quote(id).await?;
    tracing::info!(id, "quote deleted");
    Ok(Json(DeleteResponse { status: true }))
}

fn parse_quote_id(raw: &str) -> Result<i64, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ApiError::BadRequest("id parameter is required".to_owned()));
    }
    raw.parse().map_err(|_| ApiError::BadRequest(format!("invalid id: {raw}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code")]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use quotebook_storage::{MemoryStorage, QuoteStore};

    async fn state_with(rows: &[(&str, &str)]) -> Arc<AppState> {
        let store = MemoryStorage::new();
        for (author, quote) in rows {
            store.insert_quote(&NewQuote::new(*author, *quote)).await.unwrap();
        }
        Arc::new(AppState::new(Arc::new(store)))
    }

    #[test]
    fn test_parse_quote_id() {
        assert_eq!(parse_quote_id("2").unwrap(), 2);
        assert_eq!(parse_quote_id("").unwrap_err().status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_quote_id("   ").unwrap_err().status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_quote_id("abc").unwrap_err().status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_quote_id("1.5").unwrap_err().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_empty_id_is_bad_request() {
        let state = state_with(&[("A", "Q")]).await;
        let err = delete_quote(State(state.clone()), Path(String::new())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store.get_all_quotes().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_existing_removes_row() {
        let state = state_with(&[("A", "1"), ("B", "2")]).await;
        let Json(resp) = delete_quote(State(state.clone()), Path("2".to_owned())).await.unwrap();
        assert!(resp.status);

        let remaining: Vec<i64> =
            state.store.get_all_quotes().await.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(remaining, vec![1]);
    }

    #[tokio::test]
    async fn test_get_quotes_empty_author_lists_all() {
        let state = state_with(&[("Ann", "a"), ("Bob", "b")]).await;
        let pairs = vec![("author".to_owned(), String::new())];
        let Json(quotes) = get_quotes(State(state), Query(pairs)).await.unwrap();
        assert_eq!(quotes.len(), 2);
    }

    #[tokio::test]
    async fn test_random_quote_single_row() {
        let state = state_with(&[("A", "Q")]).await;
        for _ in 0..10 {
            let Json(quote) = random_quote(State(state.clone())).await.unwrap();
            assert_eq!(quote, Quote { id: 1, author: "A".to_owned(), quote: "Q".to_owned() });
        }
    }

    #[tokio::test]
    async fn test_random_quote_empty_store() {
        let state = state_with(&[]).await;
        let err = random_quote(State(state)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
