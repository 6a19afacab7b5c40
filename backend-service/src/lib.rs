pub mod handlers;
pub mod startup;

/// Name reported by `/health` and in the startup log line.
pub const SERVICE_NAME: &str = "backend";

/// Listen port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3001;
