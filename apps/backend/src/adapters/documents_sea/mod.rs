//! SeaORM adapter for the documents table.

use sea_orm::sea_query::{BinOper, Expr, Func};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet, QueryFilter,
    QueryOrder, Select, Set,
};

use crate::entities::documents;

pub mod dto;

pub use dto::{DocumentCreate, DocumentUpdate};

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<documents::Model>, sea_orm::DbErr> {
    documents::Entity::find()
        .order_by_asc(documents::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<documents::Model>, sea_orm::DbErr> {
    documents::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DocumentCreate,
) -> Result<documents::Model, sea_orm::DbErr> {
    let active = documents::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        subtitle: Set(dto.subtitle),
        created_at: Set(time::OffsetDateTime::now_utc()),
        content: Set(dto.content),
        keywords: Set(dto.keywords),
    };

    active.insert(conn).await
}

/// Apply `dto` to the row with `id`. `Ok(None)` when the row does not exist.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: DocumentUpdate,
) -> Result<Option<documents::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    if dto.is_empty() {
        return Ok(Some(existing));
    }

    let mut active = existing.into_active_model();
    if let Some(title) = dto.title {
        active.title = Set(title);
    }
    if let Some(subtitle) = dto.subtitle {
        active.subtitle = Set(subtitle);
    }
    if let Some(content) = dto.content {
        active.content = Set(content);
    }
    if let Some(keywords) = dto.keywords {
        active.keywords = Set(keywords);
    }

    active.update(conn).await.map(Some)
}

/// Delete by id; returns the number of rows removed.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = documents::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

/// Rows whose `keywords` array contains `term` exactly.
pub async fn search_by_keyword<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<documents::Model>, sea_orm::DbErr> {
    keyword_query(term).all(conn).await
}

pub async fn search_by_title<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<documents::Model>, sea_orm::DbErr> {
    substring_query(documents::Column::Title, term).all(conn).await
}

pub async fn search_by_subtitle<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<documents::Model>, sea_orm::DbErr> {
    substring_query(documents::Column::Subtitle, term).all(conn).await
}

// Containment (`@>`) rather than `= ANY(..)` so the GIN index on keywords applies.
fn keyword_query(term: &str) -> Select<documents::Entity> {
    documents::Entity::find()
        .filter(Expr::cust_with_values("\"keywords\" @> ARRAY[$1]::text[]", [term]))
        .order_by_asc(documents::Column::Id)
}

/// Case-insensitive substring match on `column`; LIKE wildcards in `term` match literally.
///
/// Both sides are lowercased by Postgres. Backslash is its default LIKE escape.
fn substring_query(column: documents::Column, term: &str) -> Select<documents::Entity> {
    let pattern = format!("%{}%", escape_like(term));

    documents::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col(column)))
                .binary(BinOper::Like, Func::lower(Expr::val(pattern))),
        )
        .order_by_asc(documents::Column::Id)
}

fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
