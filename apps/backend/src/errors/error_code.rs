//! Canonical error codes.
//!
//! Codes are SCREAMING_SNAKE_CASE. They travel in logs next to the trace id;
//! response bodies stay plain text.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Username/password did not match the configured admin
    InvalidCredentials,
    /// `Authorization` header absent or not `Bearer <token>`
    UnauthorizedMissingBearer,
    /// Token malformed or signature mismatch
    UnauthorizedInvalidJwt,
    /// Token past its `exp`
    UnauthorizedExpiredJwt,

    // Request validation
    BadRequest,
    InvalidJson,
    PayloadTooLarge,
    InvalidDocumentId,
    MissingSearchTerm,

    // Not found
    DocumentNotFound,
    NotFound,

    // System
    DbError,
    DbUnavailable,
    DbTimeout,
    TokenSigningFailed,
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidJson => "INVALID_JSON",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::InvalidDocumentId => "INVALID_DOCUMENT_ID",
            Self::MissingSearchTerm => "MISSING_SEARCH_TERM",

            Self::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::TokenSigningFailed => "TOKEN_SIGNING_FAILED",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
