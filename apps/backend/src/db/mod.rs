pub mod txn;

use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Pooled connection from `state`, or `DbUnavailable` when none is configured.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state.db().ok_or(AppError::DbUnavailable)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    use super::*;
    use crate::auth::credentials::AdminCredentials;
    use crate::state::security_config::SecurityConfig;

    #[test]
    fn missing_db_is_unavailable() {
        let state = AppState::without_db(SecurityConfig::new("k"), AdminCredentials::default());

        let err = require_db(&state).unwrap_err();
        assert!(matches!(err, AppError::DbUnavailable));
        assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
