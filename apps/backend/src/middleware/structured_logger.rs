//! Access log for the document service.
//!
//! Emits one `request_completed` event per request. The level follows the
//! status class, so rejected logins and gate denials surface at `warn` and
//! database failures at `error`. Requests that passed the access gate also
//! carry the token subject.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::auth::jwt::Claims;
use crate::trace_ctx::TraceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Info,
    Warn,
    Error,
}

fn severity_for(status: StatusCode) -> Severity {
    if status.is_server_error() {
        Severity::Error
    } else if status.is_client_error() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Fields shared by every access-log line.
struct RequestSummary {
    method: String,
    path: String,
    trace_id: String,
    started: Instant,
}

impl RequestSummary {
    fn capture(req: &ServiceRequest) -> Self {
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
            trace_id,
            started: Instant::now(),
        }
    }

    fn emit(&self, status: StatusCode, user_id: Option<u64>) {
        let duration_us = self.started.elapsed().as_micros() as u64;
        let status_code = status.as_u16();
        let (method, path, trace_id) = (&self.method, &self.path, &self.trace_id);

        match severity_for(status) {
            Severity::Error => error!(
                http.method = %method,
                url.path = %path,
                http.status_code = status_code,
                user_id,
                duration_us,
                trace_id = %trace_id,
                "request_completed"
            ),
            Severity::Warn => warn!(
                http.method = %method,
                url.path = %path,
                http.status_code = status_code,
                user_id,
                duration_us,
                trace_id = %trace_id,
                "request_completed"
            ),
            Severity::Info => info!(
                http.method = %method,
                url.path = %path,
                http.status_code = status_code,
                user_id,
                duration_us,
                trace_id = %trace_id,
                "request_completed"
            ),
        }
    }
}

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let summary = RequestSummary::capture(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            match &result {
                Ok(res) => {
                    // Claims are set by the access gate further in.
                    let user_id = res.request().extensions().get::<Claims>().map(|c| c.user_id);
                    summary.emit(res.status(), user_id);
                }
                Err(err) => summary.emit(err.as_response_error().status_code(), None),
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpResponse};

    use super::*;

    #[::core::prelude::v1::test]
    fn severity_follows_status_class() {
        assert_eq!(severity_for(StatusCode::OK), Severity::Info);
        assert_eq!(severity_for(StatusCode::NO_CONTENT), Severity::Info);
        assert_eq!(severity_for(StatusCode::UNAUTHORIZED), Severity::Warn);
        assert_eq!(severity_for(StatusCode::NOT_FOUND), Severity::Warn);
        assert_eq!(severity_for(StatusCode::INTERNAL_SERVER_ERROR), Severity::Error);
    }

    #[actix_web::test]
    async fn passes_responses_through_unchanged() {
        let app = test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .route("/documents", web::get().to(|| async { HttpResponse::Ok().body("[]") }))
                .route(
                    "/broken",
                    web::get().to(|| async { HttpResponse::InternalServerError().finish() }),
                ),
        )
        .await;

        let req = test::TestRequest::get().uri("/documents").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "[]");

        let req = test::TestRequest::get().uri("/broken").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
