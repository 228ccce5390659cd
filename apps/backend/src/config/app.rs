//! Process configuration, resolved once at startup.

use db_infra::db::DbSettings;
use tracing::warn;

use crate::auth::credentials::{AdminCredentials, DEFAULT_ADMIN_PASS, DEFAULT_ADMIN_USER};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

pub const DEFAULT_JWT_SECRET: &str = "your-secret-key";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub admin: AdminCredentials,
    pub security: SecurityConfig,
    pub cors_origins: Vec<String>,
    pub db: DbSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve every setting through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let var = |key: &str, default: &str| set(key).unwrap_or_else(|| default.to_string());

        let port_raw = var("BACKEND_PORT", DEFAULT_PORT);
        let port = port_raw.parse::<u16>().map_err(|_| {
            AppError::config(format!("BACKEND_PORT must be a valid port number, got '{port_raw}'"))
        })?;

        if set("JWT_SECRET").is_none() {
            warn!("JWT_SECRET not set; using the built-in development secret");
        }
        if set("ADMIN_PASS").is_none() {
            warn!("ADMIN_PASS not set; using the built-in development password");
        }

        let cors_origins = set("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect());

        let db = DbSettings::from_lookup(&lookup)?;

        Ok(Self {
            host: var("BACKEND_HOST", DEFAULT_HOST),
            port,
            admin: AdminCredentials::new(
                var("ADMIN_USER", DEFAULT_ADMIN_USER),
                var("ADMIN_PASS", DEFAULT_ADMIN_PASS),
            ),
            security: SecurityConfig::new(var("JWT_SECRET", DEFAULT_JWT_SECRET)),
            cors_origins,
            db,
        })
    }
}

/// Split a comma-separated origin list, keeping only `http(s)://` entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
