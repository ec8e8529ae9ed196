//! Request IDs and request tracing.
//!
//! Every request gets an `x-request-id`: the caller's, if it sent one, or a
//! fresh UUID. The id is recorded on the `http_request` span that wraps the
//! handler, so every log line for the request carries it (including the
//! `tracing::error!` that [`ApiError`](crate::ApiError) emits for 5xx
//! responses), and it is echoed back on the response.

use axum::{Router, body::Body, http::Request};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

/// Header carrying the request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span wrapping one request.
///
/// Must run after the request ID has been set, so the header is always present.
#[must_use]
pub fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

/// Wrap `router` so every request is assigned an ID, traced under
/// [`request_span`], and answered with the same ID.
pub fn trace_requests<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}
