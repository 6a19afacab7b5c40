//! Liveness payload shared by every service's `/health` route.

use axum::Json;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub ts: u64,
}

impl HealthStatus {
    pub fn ok(service: &'static str) -> Self {
        Self {
            status: "ok",
            service,
            ts: now_millis(),
        }
    }
}

/// `GET /health` body for `service`.
pub fn health_response(service: &'static str) -> Json<HealthStatus> {
    Json(HealthStatus::ok(service))
}

static LAST_MILLIS: AtomicU64 = AtomicU64::new(0);

/// Current Unix time in milliseconds.
///
/// Reads the wall clock on every call and never returns less than a value
/// already handed out, so a clock stepped backwards cannot make `ts` decrease.
pub fn now_millis() -> u64 {
    let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
    LAST_MILLIS.fetch_max(now, Ordering::Relaxed).max(now)
}
