//! Search request parsing and arXiv query construction.

use url::form_urlencoded;

use crate::catalog;
use crate::config::limits::MAX_QUERY_CHARS;

/// A search as submitted by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query, truncated to `MAX_QUERY_CHARS`.
    pub text: String,

    /// Selected category codes in request order.
    pub categories: Vec<String>,
}

impl SearchRequest {
    /// Create a request, truncating overly long text.
    #[must_use]
    pub fn new(text: impl Into<String>, categories: Vec<String>) -> Self {
        Self { text: truncate_chars(text.into(), MAX_QUERY_CHARS), categories }
    }

    /// Parse a raw, form-urlencoded query string.
    ///
    /// A repeated `query` keeps its last value; every non-empty `cat` value is kept in order.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut text: Option<String> = None;
        let mut categories = Vec::new();

        for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "query" => text = Some(value.into_owned()),
                "cat" if !value.trim().is_empty() => categories.push(value.trim().to_string()),
                _ => {}
            }
        }

        Self::new(text.unwrap_or_default(), categories)
    }

    /// The query text without surrounding whitespace.
    #[must_use]
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Check if there is nothing to search for.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trimmed_text().is_empty()
    }

    /// Check if a category is selected.
    #[must_use]
    pub fn is_selected(&self, code: &str) -> bool {
        self.categories.iter().any(|c| c == code)
    }

    /// The arXiv search expression for this request.
    #[must_use]
    pub fn expression(&self) -> String {
        build_query(&self.text, &self.categories)
    }
}

/// Build an arXiv boolean search expression.
///
/// With no categories the trimmed text is returned as is. Otherwise the result is
/// `(cat:C1 OR cat:C2 ...) AND all:<text>`, categories in the given order. Text is
/// not escaped; arXiv parses its own operators.
#[must_use]
pub fn build_query(text: &str, categories: &[String]) -> String {
    let text = text.trim();
    if categories.is_empty() {
        return text.to_string();
    }

    for code in categories.iter().filter(|c| !catalog::is_known(c)) {
        tracing::debug!(category = %code, "Category not in catalog, passing through");
    }

    let cats = categories.iter().map(|c| format!("cat:{c}")).collect::<Vec<_>>().join(" OR ");
    format!("({cats}) AND all:{text}")
}

fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    text
}
