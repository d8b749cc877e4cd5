//! Output formatting.

mod html;

pub use html::HtmlRenderer;
