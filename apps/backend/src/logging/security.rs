use tracing::{debug, warn};

use crate::errors::ErrorCode;
use crate::logging::pii::mask_identifier;
use crate::trace_ctx;

/// Rejected login attempt. The username is masked; the password never reaches here.
pub fn login_failed(username: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        username = %mask_identifier(username),
        "Authentication failure"
    );
}

/// Successful login; the issued token is not logged.
pub fn login_succeeded(user_id: u64) {
    let trace_id = trace_ctx::trace_id();

    debug!(event = "SECURITY_LOGIN_OK", %trace_id, user_id, "Token issued");
}

/// Request turned away by the access gate.
pub fn access_denied(code: ErrorCode, method: &str, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ACCESS_DENIED",
        %trace_id,
        reason = %code,
        http.method = method,
        url.path = path,
        "Access denied"
    );
}
