use anyhow::Result;
use quotebook_http::{AppState, create_router};
use quotebook_storage::StorageBackend;
use std::sync::Arc;

use crate::config::{ServeConfig, StoreConfig};

pub(crate) async fn run(config: ServeConfig) -> Result<()> {
    let backend = match &config.store {
        StoreConfig::Postgres(url) => {
            let backend = StorageBackend::new_postgres(url).await?;
            tracing::info!("Database connected");
            backend
        },
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory store, quotes are lost on exit");
            StorageBackend::new_memory()
        },
    };
    let backend = Arc::new(backend);

    let state = Arc::new(AppState::new(backend.clone()));
    let router = create_router(state);

    let addr = config.addr();
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    backend.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
