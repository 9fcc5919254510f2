pub mod html;
pub mod text;

use text::collapse_whitespace;

#[cfg(test)]
mod tests;

/// Fields extracted from one HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFields {
    /// Text of the first `<title>`, whitespace collapsed (`None` if there is no title element)
    pub title: Option<String>,
    /// `<h1>` texts in document order
    pub h1: Vec<String>,
    /// `<h2>` texts in document order
    pub h2: Vec<String>,
    /// `<h3>` texts in document order
    pub h3: Vec<String>,
    /// `content` of `<meta name="keywords">`
    pub meta_keywords: Option<String>,
    /// `content` of `<meta name="description">`
    pub meta_description: Option<String>,
}

impl PageFields {
    /// All heading texts (h1, then h2, then h3) joined with spaces
    pub fn heading_text(&self) -> String {
        self.h1
            .iter()
            .chain(&self.h2)
            .chain(&self.h3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Headings, meta description and meta keywords as one plain-text blob
    ///
    /// Every part is already decoded text, so the blob is never parsed as markup again.
    pub fn body_text(&self) -> String {
        let blob = [
            self.heading_text().as_str(),
            self.meta_description.as_deref().unwrap_or_default(),
            self.meta_keywords.as_deref().unwrap_or_default(),
        ]
        .join(" ");
        collapse_whitespace(&blob)
    }
}

/// Main parser entry point for page markup
pub struct Parser;

impl Parser {
    /// Parse raw page markup into indexable fields
    pub fn parse(content: &str) -> PageFields {
        html::parse(content)
    }
}
