//! Atom feed parsing for arXiv API responses.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ClientResult;
use crate::models::{ArxivEntry, FeedPage};

/// Parse one page of an arXiv Atom feed.
///
/// Entries are kept even when fields are missing; normalization decides what to do
/// with them. Only malformed XML is an error.
pub fn parse_feed(xml: &str) -> ClientResult<FeedPage> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut page = FeedPage::default();
    let mut entry: Option<ArxivEntry> = None;
    let mut in_author = false;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                match e.local_name().as_ref() {
                    b"entry" => entry = Some(ArxivEntry::default()),
                    b"author" => in_author = true,
                    _ => {}
                }
                if let Some(entry) = entry.as_mut() {
                    read_attributes(entry, &e);
                }
                text.clear();
            }
            Event::Empty(e) => {
                if let Some(entry) = entry.as_mut() {
                    read_attributes(entry, &e);
                }
            }
            Event::Text(t) => match t.unescape() {
                Ok(value) => text.push_str(&value),
                Err(err) => {
                    // Undeclared entities such as `&nbsp;` stay as written.
                    tracing::debug!(error = %err, "Keeping raw text for unescapable field");
                    text.push_str(&String::from_utf8_lossy(&t));
                }
            },
            Event::CData(t) => text.push_str(&String::from_utf8_lossy(&t)),
            Event::End(e) if e.local_name().as_ref() == b"entry" => {
                if let Some(done) = entry.take() {
                    page.entries.push(done);
                }
                text.clear();
            }
            Event::End(e) => {
                let value = text.trim();
                match (entry.as_mut(), e.local_name().as_ref()) {
                    (Some(entry), b"id") => entry.entry_id = value.to_string(),
                    (Some(entry), b"title") => entry.title = non_empty(value),
                    (Some(entry), b"summary") => entry.summary = non_empty(value),
                    (Some(entry), b"published") => entry.published = non_empty(value),
                    (Some(entry), b"doi") => entry.doi = non_empty(value),
                    (Some(entry), b"name") if in_author => {
                        if !value.is_empty() {
                            entry.authors.push(value.to_string());
                        }
                    }
                    (_, b"author") => in_author = false,
                    (None, b"totalResults") => page.total_results = value.parse().ok(),
                    _ => {}
                }
                text.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(page)
}

/// Category terms and DOI links live in attributes.
fn read_attributes(entry: &mut ArxivEntry, e: &BytesStart<'_>) {
    match e.local_name().as_ref() {
        b"category" => {
            if let Some(term) = attribute(e, b"term") {
                entry.categories.push(term);
            }
        }
        b"link" if attribute(e, b"title").as_deref() == Some("doi") => {
            if entry.doi.is_none() {
                entry.doi = attribute(e, b"href").and_then(|href| doi_from_url(&href));
            }
        }
        _ => {}
    }
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == key)
        .and_then(|a| a.unescape_value().ok())
        .map(|v| v.into_owned())
}

fn doi_from_url(url: &str) -> Option<String> {
    let (_, doi) = url.split_once("doi.org/")?;
    non_empty(doi)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
