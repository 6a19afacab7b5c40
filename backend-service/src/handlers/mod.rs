pub mod api;
pub mod health;

pub use api::api_placeholder;
pub use health::health_check;
