//! Mock-database fixtures for document routes.

use docs_backend::auth::credentials::AdminCredentials;
use docs_backend::entities::documents;
use docs_backend::infra::state::build_state;
use docs_backend::state::app_state::AppState;
use docs_backend::state::security_config::SecurityConfig;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Statement, Transaction};
use time::macros::datetime;

use crate::common::TEST_SECRET;

pub fn security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

pub fn row(id: i64, title: &str, subtitle: &str, keywords: &[&str]) -> documents::Model {
    documents::Model {
        id,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        created_at: datetime!(2025-03-01 09:00:00 UTC),
        content: format!("content of {title}"),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Empty mock; callers append the query/exec results their request consumes.
pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub async fn state_with(conn: DatabaseConnection) -> AppState {
    build_state()
        .with_connection(conn)
        .with_security(security())
        .with_admin(AdminCredentials::default())
        .build()
        .await
        .expect("state should build")
}

/// Keep a handle on the mock so its transaction log can be inspected later.
pub async fn state_and_handle(db: MockDatabase) -> (AppState, DatabaseConnection) {
    let conn = db.into_connection();
    let state = state_with(conn.clone()).await;
    (state, conn)
}

/// Every statement the mock saw, in order.
pub fn executed_statements(conn: DatabaseConnection) -> Vec<Statement> {
    conn.into_transaction_log()
        .into_iter()
        .flat_map(|txn: Transaction| txn.statements().to_vec())
        .collect()
}

/// SQL text of every statement the mock saw, values inlined.
pub fn executed_sql(conn: DatabaseConnection) -> Vec<String> {
    executed_statements(conn)
        .into_iter()
        .map(|stmt| stmt.to_string())
        .collect()
}

/// The first statement whose SQL starts with `SELECT` and contains `needle`.
pub fn find_select(statements: &[Statement], needle: &str) -> Option<Statement> {
    statements
        .iter()
        .find(|stmt| stmt.sql.starts_with("SELECT") && stmt.sql.contains(needle))
        .cloned()
}
