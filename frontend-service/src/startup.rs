use crate::handlers::{health_check, index};
use crate::SERVICE_NAME;
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::any,
    Router,
};
use service_core::config::Config;
use service_core::error::AppError;
use service_core::middleware::{
    exact_routes_middleware, http_trace_layer, request_id_middleware,
    security_headers_middleware, ExactRoutes,
};
use service_core::server::Server;

/// Routes that only answer when the request target has no query string.
const EXACT_ROUTES: ExactRoutes = &["/", "/index.html", "/health"];

pub fn build_router() -> Router {
    Router::new()
        .route("/", any(index))
        .route("/index.html", any(index))
        .route("/health", any(health_check))
        .layer(from_fn_with_state(EXACT_ROUTES, exact_routes_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
}

pub struct Application {
    server: Server,
}

impl Application {
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let server = Server::bind(SERVICE_NAME, config.port, build_router()).await?;

        Ok(Self { server })
    }

    pub fn port(&self) -> u16 {
        self.server.port()
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.run_until_stopped().await
    }
}
