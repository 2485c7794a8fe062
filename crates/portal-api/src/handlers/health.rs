use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Serialize)]
pub struct HealthStatus {
    status: String,
    version: String,
}

pub async fn health_check() -> (StatusCode, Json<ApiResponse<HealthStatus>>) {
    (
        StatusCode::OK,
        Json(ApiResponse::success(HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })),
    )
}
