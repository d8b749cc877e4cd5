//! HTML page rendering.
//!
//! Templates are compiled into the binary and rendered with `minijinja`; every
//! value interpolated into a `.html` template is HTML-escaped automatically.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::catalog::{self, Domain};
use crate::error::SearchResult;
use crate::models::PaperRecord;
use crate::query::SearchRequest;

const SEARCH_PAGE: &str = "index.html";

/// Checkbox state for one catalog category.
#[derive(Debug, Serialize)]
struct CategoryOption {
    code: &'static str,
    label: &'static str,
    checked: bool,
}

/// One collapsible domain section of the advanced search panel.
#[derive(Debug, Serialize)]
struct DomainSection {
    name: &'static str,
    categories: Vec<CategoryOption>,
}

impl DomainSection {
    fn new(domain: &Domain, request: &SearchRequest) -> Self {
        Self {
            name: domain.name,
            categories: domain
                .categories
                .iter()
                .map(|c| CategoryOption {
                    code: c.code,
                    label: c.label,
                    checked: request.is_selected(c.code),
                })
                .collect(),
        }
    }
}

/// Renders the search page.
#[derive(Debug)]
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Create a renderer with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns error if a template fails to compile.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(SEARCH_PAGE, include_str!("../../templates/index.html"))?;
        Ok(Self { env })
    }

    /// Render the search page for a request and its results.
    ///
    /// Results are only shown when the request has query text.
    pub fn render_search_page(
        &self,
        papers: &[PaperRecord],
        request: &SearchRequest,
    ) -> SearchResult<String> {
        let domains: Vec<DomainSection> =
            catalog::DOMAINS.iter().map(|d| DomainSection::new(d, request)).collect();

        let template = self.env.get_template(SEARCH_PAGE)?;
        let html = template.render(context! {
            query => &request.text,
            searched => !request.is_empty(),
            papers => papers,
            domains => &domains,
        })?;

        Ok(html)
    }
}
