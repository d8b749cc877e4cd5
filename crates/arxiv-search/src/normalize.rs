//! Mapping raw arXiv entries to display records.

use chrono::{DateTime, FixedOffset};

use crate::models::{ArxivEntry, NO_ABSTRACT, NO_TITLE, PaperRecord, UNKNOWN_DATE};

/// Display format for publication dates, e.g. "March 03, 2024".
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Normalize entries and order them newest first.
///
/// Entries without an identifier are skipped. Undated records sort after every
/// dated one; ties keep feed (relevance) order.
#[must_use]
pub fn normalize_entries(entries: Vec<ArxivEntry>) -> Vec<PaperRecord> {
    let mut papers: Vec<PaperRecord> = entries
        .into_iter()
        .filter_map(|entry| {
            if entry.entry_id.trim().is_empty() {
                tracing::warn!(title = ?entry.title, "Skipping arXiv entry without identifier");
                return None;
            }
            Some(normalize_entry(entry))
        })
        .collect();

    sort_newest_first(&mut papers);
    papers
}

/// Normalize a single entry.
#[must_use]
pub fn normalize_entry(entry: ArxivEntry) -> PaperRecord {
    let published_at = entry.published.as_deref().and_then(parse_timestamp);
    let external_id = entry
        .doi
        .as_deref()
        .map(str::trim)
        .filter(|doi| !doi.is_empty())
        .map_or_else(|| entry.short_id().to_string(), str::to_string);

    PaperRecord {
        title: entry
            .title
            .as_deref()
            .map(collapse_whitespace)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| NO_TITLE.to_string()),
        authors: collapse_authors(entry.authors),
        abstract_text: entry
            .summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(NO_ABSTRACT)
            .to_string(),
        url: pdf_url(&entry.entry_id),
        external_id,
        categories: entry.categories,
        published_date: published_at
            .map(|at| at.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
        published_at,
    }
}

/// Join the last two authors with " & ", leaving N-1 display entries.
#[must_use]
pub fn collapse_authors(mut authors: Vec<String>) -> Vec<String> {
    if authors.len() > 1 {
        if let Some(last) = authors.pop() {
            if let Some(second_last) = authors.last_mut() {
                second_last.push_str(" & ");
                second_last.push_str(&last);
            }
        }
    }
    authors
}

/// Turn an entry identifier into an HTTPS PDF link.
#[must_use]
pub fn pdf_url(entry_id: &str) -> String {
    let url = entry_id.trim();
    let url = match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    };
    url.replacen("/abs/", "/pdf/", 1)
}

/// Sort records by publication instant, descending; undated last.
pub fn sort_newest_first(papers: &mut [PaperRecord]) {
    // Option orders None before Some, so reversing puts undated records last.
    papers.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    match DateTime::parse_from_rfc3339(value.trim()) {
        Ok(at) => Some(at),
        Err(err) => {
            tracing::debug!(value, error = %err, "Unparseable publication date");
            None
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
