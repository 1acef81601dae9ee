use letslearn::config::Settings;
use letslearn::server::Application;
use letslearn::telemetry::init_tracing;

/// LetsLearn Service Entry Point
///
/// Loads `.env` (if present), installs the `tracing` subscriber, reads
/// [`Settings`] from the environment and runs the Actix-web server.
///
/// # Endpoints
/// - Landing page: `/`
/// - Health check: `/api/health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `SERVER_HOST` / `SERVER_PORT`, binding `127.0.0.1:8080` by default
/// - `RUST_LOG` for log filtering
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let settings = Settings::from_env();
    let app = Application::build(&settings)?;
    app.run_until_stopped().await
}
