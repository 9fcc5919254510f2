use serde::{Deserialize, Serialize};

/// One entry of the search index
///
/// Field order is the serialized key order: `title`, `url`, `keywords`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page title, or the file stem when the page has none
    pub title: String,

    /// File name of the page, used as a relative link
    pub url: String,

    /// Unique keywords in first-seen order
    pub keywords: Vec<String>,
}

impl PageRecord {
    /// Create a new page record
    pub fn new(title: String, url: String, keywords: Vec<String>) -> Self {
        Self {
            title,
            url,
            keywords,
        }
    }
}
