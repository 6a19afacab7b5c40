pub mod logging;

pub use logging::{STARTUP_TARGET, env_filter, init_tracing, with_startup_directive};
