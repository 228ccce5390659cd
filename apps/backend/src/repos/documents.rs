//! Document repository (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::documents_sea as documents_adapter;
use crate::entities::documents;
use crate::errors::domain::DomainError;

pub use documents_adapter::{DocumentCreate, DocumentUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub created_at: OffsetDateTime,
}

/// Which column a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Keywords,
    Title,
    Subtitle,
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Document>, DomainError> {
    let rows = documents_adapter::find_all(conn).await?;
    Ok(rows.into_iter().map(Document::from).collect())
}

pub async fn require<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Document, DomainError> {
    documents_adapter::find_by_id(conn, id)
        .await?
        .map(Document::from)
        .ok_or_else(|| DomainError::document_not_found(id))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DocumentCreate,
) -> Result<Document, DomainError> {
    let row = documents_adapter::create(conn, dto).await?;
    Ok(Document::from(row))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: DocumentUpdate,
) -> Result<Document, DomainError> {
    documents_adapter::update(conn, id, dto)
        .await?
        .map(Document::from)
        .ok_or_else(|| DomainError::document_not_found(id))
}

/// Remove the document; `false` when nothing matched.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    Ok(documents_adapter::delete(conn, id).await? > 0)
}

pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    field: SearchField,
    term: &str,
) -> Result<Vec<Document>, DomainError> {
    let rows = match field {
        SearchField::Keywords => documents_adapter::search_by_keyword(conn, term).await?,
        SearchField::Title => documents_adapter::search_by_title(conn, term).await?,
        SearchField::Subtitle => documents_adapter::search_by_subtitle(conn, term).await?,
    };
    Ok(rows.into_iter().map(Document::from).collect())
}

impl From<documents::Model> for Document {
    fn from(model: documents::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            subtitle: model.subtitle,
            content: model.content,
            keywords: model.keywords,
            created_at: model.created_at,
        }
    }
}
