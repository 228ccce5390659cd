use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{DocumentId, ValidatedJson};
use crate::repos::documents::{self, Document, DocumentCreate, DocumentUpdate};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub keywords: Vec<String>,
}

/// Update body. Absent or empty fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateDocumentRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentResponse {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub content: String,
    pub keywords: Vec<String>,
}

impl From<CreateDocumentRequest> for DocumentCreate {
    fn from(req: CreateDocumentRequest) -> Self {
        Self {
            title: req.title,
            subtitle: req.subtitle,
            content: req.content,
            keywords: req.keywords,
        }
    }
}

impl From<UpdateDocumentRequest> for DocumentUpdate {
    fn from(req: UpdateDocumentRequest) -> Self {
        Self {
            title: req.title.filter(|s| !s.is_empty()),
            subtitle: req.subtitle.filter(|s| !s.is_empty()),
            content: req.content.filter(|s| !s.is_empty()),
            keywords: req.keywords.filter(|k| !k.is_empty()),
        }
    }
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            subtitle: doc.subtitle,
            created_at: doc.created_at,
            content: doc.content,
            keywords: doc.keywords,
        }
    }
}

pub(crate) fn to_responses(docs: Vec<Document>) -> Vec<DocumentResponse> {
    docs.into_iter().map(DocumentResponse::from).collect()
}

async fn create_document(
    body: ValidatedJson<CreateDocumentRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let dto = DocumentCreate::from(body.into_inner());

    let doc = with_txn(&app_state, |txn| {
        Box::pin(async move { documents::create(txn, dto).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Created().json(DocumentResponse::from(doc)))
}

async fn list_documents(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let docs = with_txn(&app_state, |txn| {
        Box::pin(async move { documents::list(txn).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(to_responses(docs)))
}

async fn get_document(
    id: DocumentId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let doc = with_txn(&app_state, |txn| {
        Box::pin(async move { documents::require(txn, id.0).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DocumentResponse::from(doc)))
}

async fn update_document(
    id: DocumentId,
    body: ValidatedJson<UpdateDocumentRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let dto = DocumentUpdate::from(body.into_inner());

    let doc = with_txn(&app_state, |txn| {
        Box::pin(async move { documents::update(txn, id.0, dto).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DocumentResponse::from(doc)))
}

/// 204 whether or not a row was removed.
async fn delete_document(
    id: DocumentId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let removed = with_txn(&app_state, |txn| {
        Box::pin(async move { documents::delete(txn, id.0).await.map_err(AppError::from) })
    })
    .await?;

    tracing::debug!(document_id = id.0, removed, "delete processed");
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_documents))
            .route(web::post().to(create_document)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_document))
            .route(web::put().to(update_document))
            .route(web::delete().to(delete_document)),
    );
}
