use crate::dto::StatusResponse;
use axum::Json;

pub const SERVICE_NAME: &str = "RadioCalio2 API Server";

/// GET /
/// Response: 200 OK with JSON
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: SERVICE_NAME,
        status: "running",
    })
}
