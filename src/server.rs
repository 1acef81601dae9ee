use crate::config::Settings;
use crate::openapi::ApiDoc;
use crate::security::SecurityPolicy;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer, web};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Registers every route of the service: the landing page, the `/api`
/// scope and Swagger UI (`/swagger-ui/`, document at `/api-docs/openapi.json`).
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::routes::configure).service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

/// Assembles the application as it ships: request tracing outermost, then
/// the security policy, then every route.
pub fn app(
    policy: SecurityPolicy,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(policy)
        .wrap(TracingLogger::default())
        .configure(configure_app)
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub fn build(settings: &Settings) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(settings.address())?;
        let port = listener.local_addr()?.port();

        let policy = SecurityPolicy::permit_all();
        policy.log_startup();

        let server = HttpServer::new(move || app(policy.clone()))
            .listen(listener)?
            .run();

        tracing::info!(host = %settings.host, port, "LetsLearn listening");

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
