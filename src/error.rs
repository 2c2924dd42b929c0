//! Error definitions for the inspector endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by the inspector's request handling.
#[derive(Debug, Error)]
pub enum InspectorError {
    /// Credential missing, malformed, or rejected by the access guard.
    /// Rendered as a bare 401 so the diagnostic payload never leaks.
    #[error("credential missing or rejected")]
    Unauthorized,
}

impl IntoResponse for InspectorError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}
