use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const API_PREFIX: &str = "/api";

#[derive(Debug, Serialize)]
pub struct ApiPlaceholder {
    pub message: &'static str,
}

/// Fallback for every path without an explicit route.
///
/// Anything under the `/api` prefix gets the placeholder payload; the rest
/// is a bare 404.
pub async fn api_placeholder(uri: Uri) -> Response {
    let target = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());

    if target.starts_with(API_PREFIX) {
        Json(ApiPlaceholder {
            message: "Engine backend API placeholder",
        })
        .into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
