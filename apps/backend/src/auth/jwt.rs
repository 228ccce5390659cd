use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::security_config::SecurityConfig;

/// Claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject of the token
    pub user_id: u64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Random per-token id; two tokens minted in the same second still differ
    pub jti: String,
}

fn unix_seconds(t: SystemTime) -> Result<i64, AppError> {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| {
            AppError::internal(ErrorCode::Internal, "System clock is before the Unix epoch")
        })
}

/// Mint an access token for `user_id`, valid for `security.token_ttl` from `now`.
pub fn mint_access_token(
    user_id: u64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = unix_seconds(now)?;
    let exp = iat + security.token_ttl.as_secs() as i64;

    let claims = Claims {
        user_id,
        iat,
        exp,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| {
        error!(error = %e, "token encoding failed");
        AppError::internal(ErrorCode::TokenSigningFailed, "Failed to generate token")
    })
}

/// Verify `token` as of `now`.
///
/// Signature and structure are checked by `jsonwebtoken`; expiry is checked
/// here so a token is already dead at exactly `exp`.
pub fn verify_access_token_at(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Claims, AppError> {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        match e.kind() {
            ErrorKind::InvalidSignature => debug!("token rejected: signature mismatch"),
            other => debug!(kind = ?other, "token rejected: malformed"),
        }
        AppError::UnauthorizedInvalidJwt
    })?;

    if unix_seconds(now)? >= claims.exp {
        debug!(user_id = claims.user_id, exp = claims.exp, "token rejected: expired");
        return Err(AppError::UnauthorizedExpiredJwt);
    }

    Ok(claims)
}

/// Verify `token` against the current wall clock.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    verify_access_token_at(token, SystemTime::now(), security)
}
