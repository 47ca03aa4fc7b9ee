//! One access-log line per request.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

/// Emits an access-log event after the handler has produced its response.
///
/// The route template is logged instead of the raw path when the router matched
/// one. Server errors are logged at `warn`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let route = route_label(&request);

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    if is_failure(status) {
        tracing::warn!(%method, %route, status = status.as_u16(), latency_ms, "Request failed");
    } else {
        tracing::info!(%method, %route, status = status.as_u16(), latency_ms, "Request served");
    }

    response
}

fn route_label(request: &Request) -> String {
    match request.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => request.uri().path().to_owned(),
    }
}

fn is_failure(status: StatusCode) -> bool {
    status.is_server_error()
}
