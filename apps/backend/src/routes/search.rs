use actix_web::{web, HttpResponse, Result};

use super::documents::to_responses;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::SearchTerm;
use crate::repos::documents::{self, SearchField};
use crate::state::app_state::AppState;

async fn run_search(
    app_state: &AppState,
    field: SearchField,
    term: SearchTerm,
) -> Result<HttpResponse, AppError> {
    let docs = with_txn(app_state, |txn| {
        Box::pin(async move {
            documents::search(txn, field, term.as_str())
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(to_responses(docs)))
}

async fn by_keyword(
    term: SearchTerm,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    run_search(&app_state, SearchField::Keywords, term).await
}

async fn by_title(
    term: SearchTerm,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    run_search(&app_state, SearchField::Title, term).await
}

async fn by_subtitle(
    term: SearchTerm,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    run_search(&app_state, SearchField::Subtitle, term).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/keywords").route(web::get().to(by_keyword)))
        .service(web::resource("/title").route(web::get().to(by_title)))
        .service(web::resource("/subtitle").route(web::get().to(by_subtitle)));
}
