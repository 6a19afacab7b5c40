//! service-core: Shared infrastructure for the Engine OS placeholder services.
pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod observability;
pub mod server;

pub use axum;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;
pub use tracing;
