//! Request correlation.
//!
//! Every request gets an `x-request-id` (UUID v4 unless the client sent
//! one). The id is recorded on the request's tracing span and copied onto
//! the response.

use axum::{body::Body, http::Request};
use tracing::Span;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request id carried by `request`, or `"unknown"`.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Span factory for `TraceLayer::make_span_with`.
pub fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id(request),
        method = %request.method(),
        path = %request.uri().path(),
    )
}
