use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::credentials::AdminCredentials;

/// Shared resources handed to every worker through `web::Data`.
#[derive(Debug)]
pub struct AppState {
    db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
    pub admin: AdminCredentials,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig, admin: AdminCredentials) -> Self {
        Self {
            db: Some(db),
            security,
            admin,
        }
    }

    /// State without a pool; document routes answer `DbUnavailable`.
    pub fn without_db(security: SecurityConfig, admin: AdminCredentials) -> Self {
        Self {
            db: None,
            security,
            admin,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
