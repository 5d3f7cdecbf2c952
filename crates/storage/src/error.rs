//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error. Every variant surfaces to HTTP callers as a 500.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Pool exhausted or closed; the database could not be reached in time.
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// SQL / connection / row decoding failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient. Used for log levels only; nothing retries.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Database(sqlx::Error::Io(_)))
    }
}

/// Custom `From<sqlx::Error>` instead of blanket `#[from]`:
/// pool timeouts and a closed pool become `Unavailable`, everything else `Database`.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => Self::Unavailable(err),
            _ => Self::Database(err),
        }
    }
}
