/// # Health Status Response
///
/// Payload of the `GET /api/health` liveness probe: a constant status,
/// application name and version plus the instant the check ran.
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
pub mod health;

pub use health::HealthResponse;
