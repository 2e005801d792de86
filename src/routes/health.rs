//! Health check endpoint for container orchestration.
//!
//! Liveness only: it never consults the classifier, so it answers as long as
//! the process can serve HTTP.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
