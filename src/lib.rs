//! Vitals: a minimal HTTP liveness endpoint.
//!
//! Exposes a single `GET /health` route that answers with a fixed JSON
//! payload, and a bare 404 for everything else. Intended as a liveness
//! probe target for orchestration and monitoring systems.

pub mod config;
pub mod middleware;
pub mod routes;
pub mod server;
