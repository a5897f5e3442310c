//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK with a JSON status payload
//! when the process is running. Used by Kubernetes, ECS, systemd, and load
//! balancers to verify the service is alive.

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Health check handler.
///
/// Returns `{"status": "ok"}` to indicate the service is running. This is a
/// liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, Json(body)) = health().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
