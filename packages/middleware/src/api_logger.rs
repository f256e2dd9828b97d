//! Request logging middleware.
//!
//! Every request is logged at trace level when it arrives and at debug level
//! when it completes, with its status code and the elapsed time. Server errors
//! and failed requests are logged at error level.

use std::{
    future::{Ready, ready},
    time::Instant,
};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::StatusCode,
};
use futures_util::future::LocalBoxFuture;

/// Request logging middleware factory.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiLogger;

impl<S, B> Transform<S, ServiceRequest> for ApiLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = ApiLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiLoggerMiddleware { service }))
    }
}

pub struct ApiLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ApiLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let prefix = request_prefix(req.method().as_str(), req.path(), req.query_string());
        log::trace!("{prefix} STARTED");

        let future = self.service.call(req);

        Box::pin(async move {
            let result = future.await;
            let elapsed = start.elapsed().as_millis();

            match &result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_server_error() {
                        log::error!(
                            "{prefix} FAILED ({status}) ({elapsed} ms): {:?}",
                            response.response().error()
                        );
                    } else {
                        log::debug!("{prefix} {} ({elapsed} ms)", status_label(status));
                    }
                }
                Err(e) => {
                    log::error!("{prefix} FAILED ({elapsed} ms): {e:?}");
                }
            }

            result
        })
    }
}

fn request_prefix(method: &str, path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{method} {path}")
    } else {
        format!("{method} {path}?{query}")
    }
}

fn status_label(status: StatusCode) -> String {
    if status.is_success() || status.is_redirection() {
        format!("FINISHED ({status})")
    } else {
        format!("FINISHED WITH CLIENT ERROR ({status})")
    }
}
