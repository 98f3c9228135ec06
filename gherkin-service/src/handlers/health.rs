use axum::Json;

use crate::models::HealthStatus;

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::ALIVE)
}
