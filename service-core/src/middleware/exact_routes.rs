use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Fixed routes that only match the bare path.
pub type ExactRoutes = &'static [&'static str];

/// Rejects requests to a fixed route when they carry a query string.
///
/// A fixed route is matched against the full request target, so
/// `/health?x=1` is not `/health` and gets an empty 404.
pub async fn exact_routes_middleware(
    State(routes): State<ExactRoutes>,
    req: Request,
    next: Next,
) -> Response {
    let uri = req.uri();
    if uri.query().is_some() && routes.contains(&uri.path()) {
        return StatusCode::NOT_FOUND.into_response();
    }

    next.run(req).await
}
