//! Assertions for plain-text error responses.

use actix_web::body::{to_bytes, MessageBody};
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, CONTENT_TYPE, WWW_AUTHENTICATE};

/// Assert that a response follows the backend's plain-text error contract and
/// return its body.
///
/// Checks:
/// - status matches `expected_status`
/// - `Content-Type` is `text/plain`
/// - `x-trace-id` header is present and non-empty
/// - 401 responses advertise `WWW-Authenticate: Bearer`
pub async fn assert_plain_text_error<B>(resp: ServiceResponse<B>, expected_status: u16) -> String
where
    B: MessageBody,
{
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("text/plain"),
        "Content-Type must be text/plain (got {content_type})"
    );

    let trace_id = headers
        .get(HeaderName::from_static("x-trace-id"))
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    if expected_status == 401 {
        let www_auth = headers
            .get(WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert_eq!(www_auth, "Bearer", "401 responses must advertise Bearer auth");
    }

    let bytes = match to_bytes(resp.into_body()).await {
        Ok(bytes) => bytes,
        Err(_) => panic!("failed to read response body"),
    };
    String::from_utf8(bytes.to_vec()).expect("error body should be UTF-8")
}
