use std::fmt;
use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Lifetime of an issued access token.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Token signing settings, built once at startup and shared read-only.
#[derive(Clone)]
pub struct SecurityConfig {
    /// HMAC key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    pub algorithm: Algorithm,
    pub token_ttl: Duration,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secret() {
        let sec = SecurityConfig::new("super-secret-value");
        let rendered = format!("{sec:?}");
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("HS256"));
    }

    #[test]
    fn defaults_to_hs256_and_one_day() {
        let sec = SecurityConfig::new(b"k".to_vec());
        assert_eq!(sec.algorithm, Algorithm::HS256);
        assert_eq!(sec.token_ttl, Duration::from_secs(86_400));
    }
}
