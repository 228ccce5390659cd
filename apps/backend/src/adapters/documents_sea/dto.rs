//! DTOs for the documents_sea adapter.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCreate {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub keywords: Vec<String>,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentUpdate {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub keywords: Option<Vec<String>>,
}

impl DocumentUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subtitle.is_none()
            && self.content.is_none()
            && self.keywords.is_none()
    }
}
