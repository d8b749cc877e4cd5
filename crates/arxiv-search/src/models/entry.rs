//! Raw entry model matching the arXiv Atom feed.

/// One `<entry>` from an arXiv Atom feed, before normalization.
///
/// Every field except `entry_id` may be absent in a malformed feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArxivEntry {
    /// Canonical identifier, e.g. `http://arxiv.org/abs/2401.01234v1`.
    pub entry_id: String,

    /// Paper title (may span lines).
    pub title: Option<String>,

    /// Abstract.
    pub summary: Option<String>,

    /// Author names in feed order.
    pub authors: Vec<String>,

    /// DOI of the published version, when arXiv knows it.
    pub doi: Option<String>,

    /// Category terms in feed order (primary first).
    pub categories: Vec<String>,

    /// Publication timestamp as delivered (RFC 3339).
    pub published: Option<String>,
}

impl ArxivEntry {
    /// Create an entry with just an identifier.
    #[must_use]
    pub fn new(entry_id: impl Into<String>) -> Self {
        Self { entry_id: entry_id.into(), ..Self::default() }
    }

    /// The short arXiv identifier (the part after `abs/`), e.g. `2401.01234v1`.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.entry_id.rsplit_once("abs/").map_or(self.entry_id.as_str(), |(_, id)| id)
    }

    /// arXiv reports query errors as a feed entry whose id points at `/api/errors`.
    #[must_use]
    pub fn is_error_entry(&self) -> bool {
        self.entry_id.contains("/api/errors")
    }
}

/// One page of an arXiv Atom feed.
#[derive(Debug, Clone, Default)]
pub struct FeedPage {
    /// `opensearch:totalResults` (matches across all pages).
    pub total_results: Option<u32>,

    /// Entries on this page.
    pub entries: Vec<ArxivEntry>,
}

impl FeedPage {
    /// Check if the feed reports more matches beyond `fetched`.
    #[must_use]
    pub fn has_more(&self, fetched: u32) -> bool {
        !self.entries.is_empty() && self.total_results.is_none_or(|total| fetched < total)
    }
}
