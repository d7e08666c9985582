//! Per-request tracking: ids, timing and counters for every route.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Instrument, debug, debug_span};
use uuid::Uuid;

/// Wraps each request in a span carrying a fresh request id, then records
/// latency plus per-route counters once the response is ready.
///
/// Metric labels carry the matched route template (`/products/{id}`, not
/// `/products/42`); requests the router cannot match share one `unmatched`
/// label. The raw path only ever appears in the log span.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| String::from("unmatched"));
    let span = debug_span!("request", %request_id, %method, path = %path);

    let start = Instant::now();
    let response = next.run(req).instrument(span).await;
    let elapsed = start.elapsed();
    let status = response.status().as_u16();

    debug!(%request_id, %method, path = %path, status, ?elapsed, "request completed");
    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "path" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("http_request_duration_seconds", "path" => route)
        .record(elapsed.as_secs_f64());

    response
}
