use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa::path` annotations on the
/// handlers and served by Swagger UI.
///
/// # Endpoints
/// - Landing page: `GET /`
/// - Health Check: `GET /api/health`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::home::home,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse
        )
    ),
    tags(
        (name = "Home", description = "Project landing page"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Bootstrap API for the LetsLearn online-course platform",
        title = "LetsLearn API",
    )
)]
pub struct ApiDoc;
