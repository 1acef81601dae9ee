use actix_web::web;

/// # Landing Page
///
/// `GET /` serves the static HTML overview of the project.
pub mod home;

/// # Health Check Endpoint
///
/// Returns the service status, name, version and the current instant.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "application": "LetsLearn",
///   "version": "0.0.1-SNAPSHOT",
///   "timestamp": "2025-11-02T09:15:27.481516Z"
/// }
/// ```
pub mod health;

/// # Route Configuration
///
/// ## Mounted Services
/// - Landing page at the root (see [`home::configure_routes`])
/// - Health check under the `/api` base path (see [`health::configure_routes`])
///
/// ## Endpoints
///
/// ```text
/// GET /            - Landing page
/// GET /api/health  - Service health status
/// ```
///
/// [`home::configure_routes`]: crate::routes::home::configure_routes
/// [`health::configure_routes`]: crate::routes::health::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(home::configure_routes)
        .service(web::scope("/api").configure(health::configure_routes));
}
