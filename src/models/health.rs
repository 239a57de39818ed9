use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Liveness payload served by `GET /health` on every example.
///
/// ## Fields
/// - `status`: always `"ok"` while the process is serving
/// - `timestamp`: UTC time of the check, millisecond precision with a `Z` suffix
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-01-01T00:00:00.000Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, Clone, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
