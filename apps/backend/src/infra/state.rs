use db_infra::bootstrap_db;
use db_infra::db::DbSettings;
use sea_orm::DatabaseConnection;

use crate::auth::credentials::AdminCredentials;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

enum DbSource {
    None,
    Settings(DbSettings),
    Connection(DatabaseConnection),
}

/// Builder for [`AppState`], shared by `main` and the tests.
pub struct StateBuilder {
    security: SecurityConfig,
    admin: AdminCredentials,
    db: DbSource,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security: SecurityConfig::new(crate::config::app::DEFAULT_JWT_SECRET),
            admin: AdminCredentials::default(),
            db: DbSource::None,
        }
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    pub fn with_admin(mut self, admin: AdminCredentials) -> Self {
        self.admin = admin;
        self
    }

    /// Connect and migrate during [`build`](Self::build).
    pub fn with_db(mut self, settings: DbSettings) -> Self {
        self.db = DbSource::Settings(settings);
        self
    }

    /// Use an already-open connection (mock databases in tests).
    pub fn with_connection(mut self, conn: DatabaseConnection) -> Self {
        self.db = DbSource::Connection(conn);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db {
            DbSource::None => Ok(AppState::without_db(self.security, self.admin)),
            DbSource::Connection(conn) => Ok(AppState::new(conn, self.security, self.admin)),
            DbSource::Settings(settings) => {
                let conn = bootstrap_db(&settings).await?;
                Ok(AppState::new(conn, self.security, self.admin))
            }
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
