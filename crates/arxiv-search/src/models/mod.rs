//! Data models for arXiv search.
//!
//! `ArxivEntry` mirrors one Atom `<entry>` as the API delivers it;
//! `PaperRecord` is the fixed display schema the page renders.

mod entry;
mod paper;

pub use entry::{ArxivEntry, FeedPage};
pub use paper::{NO_ABSTRACT, NO_TITLE, PaperRecord, UNKNOWN_DATE};
