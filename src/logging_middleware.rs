// src/logging_middleware.rs
//! Debug-level request/response body logging with password redaction

use axum::body::{to_bytes, HttpBody};
use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{debug, enabled, Level};

use crate::common::redact_passwords;

/// Largest body buffered for logging; matches the `Json` extractor's default limit
const MAX_LOGGED_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Only bodies with a known size within the limit are buffered
fn fits_log_limit(body: &Body) -> bool {
    body.size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_LOGGED_BODY_BYTES as u64)
}

/// Renders a body for the log, masking any `password` field
fn describe_body(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let body_str = std::str::from_utf8(bytes).ok()?;
    match serde_json::from_str::<serde_json::Value>(body_str) {
        Ok(mut json) => {
            redact_passwords(&mut json);
            Some(serde_json::to_string(&json).unwrap_or_else(|_| body_str.to_string()))
        }
        // Non-JSON bodies are not logged; they may carry a raw password
        Err(_) => Some(format!("<{} bytes, not JSON>", bytes.len())),
    }
}

/// Middleware to log request and response bodies when DEBUG is enabled
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !enabled!(Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let request = if fits_log_limit(&body) {
        let bytes = to_bytes(body, MAX_LOGGED_BODY_BYTES)
            .await
            .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

        if let Some(request_body) = describe_body(&bytes) {
            debug!(
                method = %parts.method,
                uri = %parts.uri,
                request_body = %request_body,
                "Request"
            );
        }
        Request::from_parts(parts, Body::from(bytes))
    } else {
        debug!(
            method = %parts.method,
            uri = %parts.uri,
            "Request body too large or unsized, not logged"
        );
        Request::from_parts(parts, body)
    };

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    if !fits_log_limit(&body) {
        debug!(status = %parts.status, "Response body too large or unsized, not logged");
        return Ok(Response::from_parts(parts, body));
    }

    let bytes = to_bytes(body, MAX_LOGGED_BODY_BYTES)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(response_body) = describe_body(&bytes) {
        debug!(
            status = %parts.status,
            response_body = %response_body,
            "Response"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
