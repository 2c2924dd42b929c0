//! Credential middleware for the version endpoint.
//!
//! # Responsibilities
//! - Let every request through when no guard is configured
//! - Accept a valid login session cookie without re-checking the credential
//! - Otherwise evaluate the guard against the credential header
//! - Reject with a bare 401; the diagnostic payload never reaches an
//!   unauthorized caller

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::InspectorError;
use crate::http::router::InspectorState;
use crate::security::session::SESSION_COOKIE;

/// Request header carrying the credential for direct (non-login) access.
pub const AUTHORIZATION_HEADER: &str = "wondertools-authorization";

pub async fn require_authorization(
    State(state): State<InspectorState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, InspectorError> {
    let Some(guard) = &state.guard else {
        return Ok(next.run(request).await);
    };

    // 1. A session minted by the login form short-circuits the guard.
    if let Some(token) = session_token(request.headers()) {
        if state.sessions.is_valid(token) {
            return Ok(next.run(request).await);
        }
    }

    // 2. Fall back to the credential header. Absent or non-UTF-8 values are
    //    treated the same as a missing credential.
    let credential = request
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|value| value.to_str().ok());

    if guard.authorize(credential) {
        Ok(next.run(request).await)
    } else {
        tracing::debug!(path = %request.uri().path(), "unauthorized version request");
        metrics::counter!("inspector_requests_total", "outcome" => "unauthorized").increment(1);
        Err(InspectorError::Unauthorized)
    }
}

fn session_token(headers: &HeaderMap) -> Option<&str> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
}
