//! HTTP API server for quotebook.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Json, Router,
    routing::{delete, get},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use quotebook_storage::QuoteStore;

pub use api_error::ApiError;
pub use query_types::AuthorQuery;
pub use response_types::{DeleteResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Built once at startup and shared via `Arc`; the store is the only
/// state requests have in common.
pub struct AppState {
    /// Quote persistence backend
    pub store: Arc<dyn QuoteStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/quotes",
            get(handlers::quotes::get_quotes).post(handlers::quotes::create_quote),
        )
        .route("/quotes/random", get(handlers::quotes::random_quote))
        .route("/quotes/{id}", delete(handlers::quotes::delete_quote))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
