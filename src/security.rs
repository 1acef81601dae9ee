use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, Result};
use std::future::{Ready, ready};
use std::pin::Pin;

/// Request filtering applied in front of every handler.
///
/// Only the development policy exists: every request is let through, CSRF
/// protection is off and neither form login nor HTTP Basic challenges are
/// issued. No request is ever answered with 401 or 403 by this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityPolicy {
    permit_all: bool,
    csrf_enabled: bool,
    form_login_enabled: bool,
    http_basic_enabled: bool,
}

impl SecurityPolicy {
    /// Development-only policy. Not an access-control design.
    pub fn permit_all() -> Self {
        Self {
            permit_all: true,
            csrf_enabled: false,
            form_login_enabled: false,
            http_basic_enabled: false,
        }
    }

    pub fn permits_all(&self) -> bool {
        self.permit_all
    }

    pub fn csrf_enabled(&self) -> bool {
        self.csrf_enabled
    }

    pub fn form_login_enabled(&self) -> bool {
        self.form_login_enabled
    }

    pub fn http_basic_enabled(&self) -> bool {
        self.http_basic_enabled
    }

    pub fn log_startup(&self) {
        tracing::warn!(
            permit_all = self.permit_all,
            csrf = self.csrf_enabled,
            form_login = self.form_login_enabled,
            http_basic = self.http_basic_enabled,
            "Security policy permits every request; development use only"
        );
    }
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self::permit_all()
    }
}

pub struct SecurityMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        tracing::debug!(method = %req.method(), path = req.path(), "permitted");
        Box::pin(self.service.call(req))
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityPolicy
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddleware { service }))
    }
}
