//! Request tracing middleware.
//!
//! Each request runs inside a tracing span carrying a generated request ID,
//! the method, and the path, so all logs emitted while handling it can be
//! correlated. Completion is logged with the status code and elapsed time.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware wrapping each request in a span with a unique request ID.
///
/// Adds nothing to the response itself; the dispatch contract forbids extra
/// response headers.
pub async fn trace_requests(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let started = Instant::now();
        let response = next.run(request).await;
        tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );
        response
    }
    .instrument(span)
    .await
}
