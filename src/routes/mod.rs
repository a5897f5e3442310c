//! HTTP route handlers and request dispatch.
//!
//! The dispatch contract is deliberately narrow: `GET /health` is the only
//! route, and every other method+path combination answers 404 with an empty
//! body. Request tracing is enabled via middleware that generates a unique
//! request ID for each incoming request.

pub mod health;

use axum::{
    http::StatusCode,
    middleware,
    routing::{on, MethodFilter},
    Router,
};

use crate::middleware::trace_requests;

/// Fallback for unmatched requests: 404 with an empty body and no headers
/// beyond what the transport adds.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Creates the Axum router.
///
/// `/health` is registered with `MethodFilter::GET` rather than `get()`,
/// which would also answer HEAD; non-GET methods on `/health` must fall
/// through to the same 404 as unmatched paths, so the method-not-allowed
/// fallback is wired to it as well.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", on(MethodFilter::GET, health::health))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(trace_requests))
}
