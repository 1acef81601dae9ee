use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const APPLICATION_NAME: &str = "LetsLearn";
pub const APPLICATION_VERSION: &str = env!("CARGO_PKG_VERSION");

/// # Health Status Response
///
/// Liveness payload returned by `GET /api/health`.
///
/// ## Fields
/// - `status`: always `"UP"` while the process serves requests
/// - `application`: application name (`"LetsLearn"`)
/// - `version`: crate version (`"0.0.1-SNAPSHOT"`)
/// - `timestamp`: UTC instant of the check, RFC 3339 with a `Z` suffix
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "application": "LetsLearn",
///   "version": "0.0.1-SNAPSHOT",
///   "timestamp": "2025-11-02T09:15:27.481516Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub application: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            application: APPLICATION_NAME.to_string(),
            version: APPLICATION_VERSION.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}
