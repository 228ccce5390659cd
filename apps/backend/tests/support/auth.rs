//! Token helpers for tests.

use std::time::{Duration, SystemTime};

use docs_backend::auth::jwt::mint_access_token;
use docs_backend::state::security_config::SecurityConfig;

/// Bearer token (without the `Bearer ` prefix) for `user_id`, minted now.
pub fn mint_test_token(user_id: u64, sec: &SecurityConfig) -> String {
    mint_access_token(user_id, SystemTime::now(), sec).expect("should mint token successfully")
}

/// Full `Authorization` header value.
pub fn bearer_header(user_id: u64, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(user_id, sec))
}

/// Token whose 24h lifetime ended an hour ago.
pub fn mint_expired_token(user_id: u64, sec: &SecurityConfig) -> String {
    let past = SystemTime::now()
        .checked_sub(sec.token_ttl + Duration::from_secs(3600))
        .unwrap();
    mint_access_token(user_id, past, sec).expect("should mint expired token successfully")
}
