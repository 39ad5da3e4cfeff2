//! Health check endpoint

use axum::Json;

use crate::models::HealthBody;

/// `GET /health` - liveness probe, no auth
pub async fn health_check() -> Json<HealthBody> {
    Json(HealthBody { status: "healthy" })
}
