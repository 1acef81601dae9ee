use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Returns the service status, name and version along with the current instant.
///
/// ## Response
///
/// - **200 OK**: Service is up
///   - Body: JSON object with `status` ("UP"), `application`, `version` and
///     `timestamp` in ISO 8601 format
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
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up())
}

/// # Route Configuration
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use chrono::DateTime;
    use serde_json::Value;
    use std::time::Duration;

    async fn fetch_health<S>(app: &S) -> Value
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).expect("Body should be valid JSON")
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let body = test::read_body(resp).await;
        let health_response: HealthResponse =
            serde_json::from_slice(&body).expect("Body should deserialize");

        assert_eq!(health_response.status, "UP");
        assert_eq!(health_response.application, "LetsLearn");
        assert_eq!(health_response.version, "0.0.1-SNAPSHOT");
        DateTime::parse_from_rfc3339(&health_response.timestamp)
            .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date");
    }

    #[actix_web::test]
    async fn test_health_timestamps_advance() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let first = fetch_health(&app).await;
        actix_web::rt::time::sleep(Duration::from_secs(1)).await;
        let second = fetch_health(&app).await;

        for field in ["status", "application", "version"] {
            assert_eq!(first[field], second[field], "{field} should be constant");
        }

        let parse = |v: &Value| {
            DateTime::parse_from_rfc3339(v["timestamp"].as_str().expect("Timestamp should be a string"))
                .expect("Timestamp should be RFC 3339")
        };
        assert!(parse(&second) > parse(&first));
    }
}
