use crate::SERVICE_NAME;
use axum::response::IntoResponse;
use service_core::health::health_response;

pub async fn health_check() -> impl IntoResponse {
    health_response(SERVICE_NAME)
}
