use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    term: String,
}

/// Trimmed, non-empty `term` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(pub String);

impl SearchTerm {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for SearchTerm {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_search_term(req.query_string()))
    }
}

fn parse_search_term(query: &str) -> Result<SearchTerm, AppError> {
    let term = web::Query::<SearchQuery>::from_query(query)
        .map(|q| q.into_inner().term)
        .unwrap_or_default();

    let term = term.trim();
    if term.is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::MissingSearchTerm,
            "Search term is required",
        ));
    }

    Ok(SearchTerm(term.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_is_trimmed_and_decoded() {
        assert_eq!(parse_search_term("term=%20rust%20lang%20").unwrap().as_str(), "rust lang");
        assert_eq!(parse_search_term("term=caf%C3%A9&page=2").unwrap().as_str(), "café");
    }

    #[test]
    fn absent_or_blank_term_is_rejected() {
        for query in ["", "term=", "term=%20%20", "other=x"] {
            let err = parse_search_term(query).unwrap_err();
            assert_eq!(err.public_message(), "Search term is required", "{query}");
        }
    }
}
