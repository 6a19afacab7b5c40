pub mod exact_routes;
pub mod security_headers;
pub mod tracing;

pub use self::exact_routes::{ExactRoutes, exact_routes_middleware};
pub use self::security_headers::security_headers_middleware;
pub use self::tracing::{REQUEST_ID_HEADER, http_trace_layer, request_id_middleware};
