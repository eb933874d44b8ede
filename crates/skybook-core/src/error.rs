//! Shared error type across skybook crates.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed body.
    BadRequest,
    /// Auth failed.
    AuthFailed,
    /// Task metadata endpoint unreachable, slow, or returned garbage.
    MetadataUnavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::AuthFailed => "AUTH_FAILED",
            ClientCode::MetadataUnavailable => "METADATA_UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SkybookError>;

/// Unified error type used by core and both services.
#[derive(Debug, Error)]
pub enum SkybookError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("auth failed")]
    AuthFailed,
    #[error("metadata unavailable: {0}")]
    MetadataUnavailable(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SkybookError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SkybookError::BadRequest(_) => ClientCode::BadRequest,
            SkybookError::AuthFailed => ClientCode::AuthFailed,
            SkybookError::MetadataUnavailable(_) => ClientCode::MetadataUnavailable,
            SkybookError::Internal(_) => ClientCode::Internal,
        }
    }

    /// HTTP status for the client-facing code.
    pub fn status(&self) -> StatusCode {
        match self.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::AuthFailed => StatusCode::UNAUTHORIZED,
            ClientCode::MetadataUnavailable => StatusCode::BAD_GATEWAY,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SkybookError {
    /// Errors surface as `{"code": ..., "msg": ...}` with the mapped status.
    fn into_response(self) -> Response {
        let body = json!({
            "code": self.client_code().as_str(),
            "msg": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}
