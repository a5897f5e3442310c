//! HTTP server startup logic.
//!
//! Plain HTTP only. The server accepts connections immediately after the
//! bind succeeds and runs until the process is terminated; a failure to
//! bind the listen port is fatal and propagates to the caller.

use std::net::SocketAddr;

use axum::Router;

use crate::config::{AppConfig, HttpServerConfig};

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Addr(#[from] std::net::AddrParseError),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Resolve the configured host and port into a socket address.
pub fn listen_addr(http: &HttpServerConfig) -> Result<SocketAddr, ServerError> {
    Ok(format!("{}:{}", http.host, http.port).parse()?)
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = listen_addr(&config.http)?;
    tracing::info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}
