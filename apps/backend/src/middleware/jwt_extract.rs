//! Access gate for protected scopes.
//!
//! Requires `Authorization: Bearer <token>`, verifies the token and stores
//! the resulting [`Claims`] in request extensions. Rejected requests are
//! answered here; the wrapped service is never called for them.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::jwt::{verify_access_token, Claims};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Case-sensitive scheme prefix, including the separating space.
pub const BEARER_PREFIX: &str = "Bearer ";

pub struct JwtExtract;

impl<S, B> Transform<S, ServiceRequest> for JwtExtract
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtExtractMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtExtractMiddleware { service }))
    }
}

pub struct JwtExtractMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JwtExtractMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authorize(&req) {
            Ok(claims) => {
                debug!(user_id = claims.user_id, "bearer token accepted");
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                // Logged and rendered on poll so both run inside the request's trace scope.
                let (http_req, _payload) = req.into_parts();
                Box::pin(async move {
                    let method = http_req.method().as_str();
                    security::access_denied(err.code(), method, http_req.path());
                    let response = err.error_response().map_into_right_body();
                    Ok(ServiceResponse::new(http_req, response))
                })
            }
        }
    }
}

fn authorize(req: &ServiceRequest) -> Result<Claims, AppError> {
    let token = extract_bearer(req.headers().get(header::AUTHORIZATION))?;

    let app_state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        AppError::internal(ErrorCode::Internal, "Application state not configured")
    })?;

    verify_access_token(token, &app_state.security)
}

/// Token part of a `Bearer` header value.
///
/// Absent, non-UTF-8, wrong scheme and empty token all count as missing.
pub fn extract_bearer(value: Option<&HeaderValue>) -> Result<&str, AppError> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .filter(|token| !token.is_empty())
        .ok_or(AppError::UnauthorizedMissingBearer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(v: &str) -> HeaderValue {
        HeaderValue::from_str(v).unwrap()
    }

    #[test]
    fn bearer_token_is_extracted() {
        assert_eq!(extract_bearer(Some(&header("Bearer abc.def.ghi"))).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_or_malformed_header_is_missing_bearer() {
        let values = [
            None,
            Some(header("")),
            Some(header("Bearer ")),
            Some(header("Basic dXNlcg==")),
        ];
        for value in values {
            assert!(matches!(
                extract_bearer(value.as_ref()),
                Err(AppError::UnauthorizedMissingBearer)
            ));
        }
    }

    #[test]
    fn scheme_is_case_sensitive() {
        assert!(extract_bearer(Some(&header("bearer abc"))).is_err());
        assert!(extract_bearer(Some(&header("BEARER abc"))).is_err());
        assert!(extract_bearer(Some(&header("Bearerabc"))).is_err());
    }

    #[test]
    fn non_utf8_header_is_missing_bearer() {
        let value = HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap();
        assert!(matches!(
            extract_bearer(Some(&value)),
            Err(AppError::UnauthorizedMissingBearer)
        ));
    }
}
