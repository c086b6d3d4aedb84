//! Liveness endpoint

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Health status
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the server is serving requests
    pub status: String,
}

/// Report that the server is up
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
