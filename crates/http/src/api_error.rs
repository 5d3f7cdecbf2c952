//! Typed API error for HTTP handlers.
//!
//! Converts handler and storage failures into HTTP responses with a JSON body.
//! Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quotebook_storage::StorageError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns
/// a static message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — malformed body, missing or non-numeric id.
    BadRequest(String),
    /// 404 Not Found — nothing to return (random quote from an empty store).
    NotFound(String),
    /// 500 Internal Server Error — storage failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg,
            Self::Internal(err) => {
                let transient =
                    err.downcast_ref::<StorageError>().is_some_and(StorageError::is_transient);
                tracing::error!(error = ?err, transient, "internal server error");
                "internal server error".to_owned()
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

/// Storage failures are logged once, when the response is built.
impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        Self::Internal(err.into())
    }
}
