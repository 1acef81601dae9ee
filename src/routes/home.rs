use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get};

/// Landing page, embedded at compile time.
pub const HOME_PAGE: &str = include_str!("../../static/index.html");

/// # Landing Page
///
/// Serves the static project overview with links to the health check and
/// the source repository. The body never changes for the process lifetime.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", body = String, content_type = "text/html")
    ),
    tag = "Home"
)]
#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(HOME_PAGE)
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(home);
}
