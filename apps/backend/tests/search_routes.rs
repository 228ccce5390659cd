mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::plain_text::assert_plain_text_error;
use docs_backend::entities::documents;
use docs_backend::routes::documents::DocumentResponse;
use sea_orm::Value;

use support::auth::bearer_header;
use support::create_test_app;
use support::documents::{
    executed_sql, executed_statements, find_select, mock_db, row, security, state_and_handle,
};

fn auth() -> (&'static str, String) {
    ("Authorization", bearer_header(1, &security()))
}

#[actix_web::test]
async fn keyword_search_returns_matching_documents() {
    let db = mock_db().append_query_results([vec![row(2, "Tokio", "Runtime", &["async", "rust"])]]);
    let (state, conn) = state_and_handle(db).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/search/keywords?term=rust")
        .insert_header(auth())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<DocumentResponse> = test::read_body_json(resp).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].id, 2);

    drop(app);
    let statements = executed_statements(conn);
    let select = find_select(&statements, "\"keywords\" @> ARRAY[$1]::text[]")
        .expect("keyword search should filter by array containment");
    assert_eq!(select.values.map(|v| v.0), Some(vec![Value::from("rust")]));
}

#[actix_web::test]
async fn title_search_is_trimmed_and_lowercased() {
    let db = mock_db().append_query_results([vec![row(1, "Rust Book", "Intro", &[])]]);
    let (state, conn) = state_and_handle(db).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/search/title?term=%20BOOK%20")
        .insert_header(auth())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<DocumentResponse> = test::read_body_json(resp).await;
    assert_eq!(body[0].title, "Rust Book");

    drop(app);
    let statements = executed_statements(conn);
    let select = find_select(&statements, "LIKE LOWER($1)")
        .expect("title search should lowercase the pattern in SQL");
    assert!(select.sql.contains("LOWER(\"title\")"), "{}", select.sql);
    // Trimmed in Rust, case folded by Postgres.
    assert_eq!(select.values.map(|v| v.0), Some(vec![Value::from("%BOOK%")]));
}

#[actix_web::test]
async fn title_search_matches_like_wildcards_literally() {
    let db = mock_db().append_query_results([vec![row(3, "50% off", "Sale", &[])]]);
    let (state, conn) = state_and_handle(db).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/search/title?term=50%25")
        .insert_header(auth())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    drop(app);
    let statements = executed_statements(conn);
    let select = find_select(&statements, "LIKE LOWER($1)").expect("title search should run");
    assert_eq!(select.values.map(|v| v.0), Some(vec![Value::from("%50\\%%")]));
}

#[actix_web::test]
async fn subtitle_search_escapes_underscore() {
    let db = mock_db().append_query_results([Vec::<documents::Model>::new()]);
    let (state, conn) = state_and_handle(db).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/search/subtitle?term=snake_case")
        .insert_header(auth())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    drop(app);
    let statements = executed_statements(conn);
    let select = find_select(&statements, "LOWER(\"subtitle\")")
        .expect("subtitle search should run");
    assert_eq!(select.values.map(|v| v.0), Some(vec![Value::from("%snake\\_case%")]));
}

#[actix_web::test]
async fn subtitle_search_without_matches_is_an_empty_array() {
    let db = mock_db().append_query_results([Vec::<documents::Model>::new()]);
    let (state, _conn) = state_and_handle(db).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/search/subtitle?term=nothing")
        .insert_header(auth())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"[]");
}

#[actix_web::test]
async fn blank_or_missing_term_is_400() {
    let (state, conn) = state_and_handle(mock_db()).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    for uri in [
        "/search/keywords",
        "/search/keywords?term=",
        "/search/title?term=%20%20",
        "/search/subtitle?other=x",
    ] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(auth())
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body = assert_plain_text_error(resp, 400).await;
        assert_eq!(body, "Search term is required");
    }

    drop(app);
    assert!(executed_sql(conn).is_empty());
}

#[actix_web::test]
async fn search_requires_a_token() {
    let (state, _conn) = state_and_handle(mock_db()).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/search/title?term=rust")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_plain_text_error(resp, 401).await;
}
