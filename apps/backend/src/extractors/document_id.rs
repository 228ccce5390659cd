use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive document id taken from the `{id}` path segment.
///
/// Existence is not checked here; handlers answer 404 themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentId(pub i64);

impl FromRequest for DocumentId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_document_id(req.match_info().get("id")))
    }
}

fn parse_document_id(raw: Option<&str>) -> Result<DocumentId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidDocumentId, "Missing document id")
    })?;

    let id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidDocumentId,
            format!("Invalid document id: {raw}"),
        )
    })?;

    if id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidDocumentId,
            format!("Document id must be positive, got: {id}"),
        ));
    }

    Ok(DocumentId(id))
}
