//! SeaORM -> DomainError translation.
//!
//! Repos convert `sea_orm::DbErr` here; `From<DomainError> for AppError`
//! takes it the rest of the way.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        // update() against a row deleted in between
        sea_orm::DbErr::RecordNotUpdated => {
            return DomainError::not_found(NotFoundKind::Document, "Document not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    // invalid_text_representation, e.g. malformed array literal
    if mentions_sqlstate(&error_msg, "22P02") {
        warn!(
            trace_id = %trace_id,
            raw_error = %Redacted(&error_msg),
            "Invalid value rejected by database"
        );
        return DomainError::validation("Invalid value");
    }

    if mentions_sqlstate(&error_msg, "23514") {
        warn!(
            trace_id = %trace_id,
            raw_error = %Redacted(&error_msg),
            "Check constraint violation"
        );
        return DomainError::validation("Check constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database operation failed")
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
