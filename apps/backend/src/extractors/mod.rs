pub mod document_id;
pub mod search_term;
pub mod validated_json;

pub use document_id::DocumentId;
pub use search_term::SearchTerm;
pub use validated_json::ValidatedJson;
