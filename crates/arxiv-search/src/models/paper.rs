//! Normalized paper record rendered on the results page.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Placeholder shown when a paper has no title.
pub const NO_TITLE: &str = "No title";

/// Placeholder shown when a paper has no abstract.
pub const NO_ABSTRACT: &str = "No abstract available";

/// Placeholder shown when the publication date is missing or unparseable.
pub const UNKNOWN_DATE: &str = "Unknown";

/// A paper in display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRecord {
    /// Trimmed title.
    pub title: String,

    /// Display author entries; the last two names are already joined with " & ".
    pub authors: Vec<String>,

    /// Trimmed abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// HTTPS link to the PDF.
    pub url: String,

    /// DOI if known, otherwise the short arXiv identifier.
    pub external_id: String,

    /// Category codes in feed order.
    pub categories: Vec<String>,

    /// "Month DD, YYYY" or "Unknown".
    pub published_date: String,

    /// Parsed publication instant, used for ordering only.
    #[serde(skip)]
    pub published_at: Option<DateTime<FixedOffset>>,
}
