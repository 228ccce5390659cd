use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::credentials::ADMIN_USER_ID;
use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Login body. Absent or `null` fields read as empty and fail the credential check.
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { username, password } = body.into_inner();
    let username = username.unwrap_or_default();
    let password = password.unwrap_or_default();

    if !app_state.admin.check(&username, &password) {
        security::login_failed(&username);
        return Err(AppError::Unauthorized);
    }

    let token = mint_access_token(ADMIN_USER_ID, SystemTime::now(), &app_state.security)?;
    security::login_succeeded(ADMIN_USER_ID);

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
