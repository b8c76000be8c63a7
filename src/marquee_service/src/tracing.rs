//! Request-scoped tracing callbacks for the HTTP trace layer.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use tracing::{Level, Span};
use uuid::Uuid;

/// One span per request, tagged with a fresh request id so log lines from
/// concurrent requests stay attributable.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::span!(
        Level::INFO,
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::event!(Level::INFO, "[REQUEST START]");
}

pub fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    tracing::event!(
        Level::INFO,
        status = %response.status(),
        latency = ?latency,
        "[REQUEST END]"
    );
}
