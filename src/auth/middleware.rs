use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use log::debug;

use crate::auth::token::validate_token;
use crate::error::AppError;

/// Rejects requests whose `Authorization` header is not a well-formed bearer token.
///
/// The whole header value, `"Bearer "` prefix included, is run through
/// [`validate_token`]. Login and health routes pass through untouched.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path();
        if path == "/health" || path.ends_with("/auth/login") {
            return Box::pin(self.service.call(req));
        }

        let outcome = match req.headers().get(header::AUTHORIZATION) {
            None => Err(AppError::Unauthorized("Missing token".into())),
            Some(value) => match value.to_str() {
                Ok(token) if validate_token(token) => Ok(()),
                _ => Err(AppError::Unauthorized("Invalid token".into())),
            },
        };

        match outcome {
            Ok(()) => Box::pin(self.service.call(req)),
            Err(app_err) => {
                debug!("rejected {} {}: {}", req.method(), req.path(), app_err);
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}
