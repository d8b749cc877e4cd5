//! HTTP routes.
//!
//! - `GET /`: search page (`query`, repeatable `cat`)
//! - `GET /health`: liveness probe
//! - `/static/*`, `/favicon.ico`, `/manifest.json`: files from the static directory

use std::path::Path;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{RawQuery, State},
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::client::ArxivClient;
use crate::error::SearchResult;
use crate::formatters::HtmlRenderer;
use crate::models::PaperRecord;
use crate::normalize::normalize_entries;
use crate::query::SearchRequest;

/// Shared state for HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// arXiv API client.
    pub client: ArxivClient,

    /// Search page renderer.
    pub renderer: HtmlRenderer,
}

impl AppState {
    /// Create handler state.
    #[must_use]
    pub fn new(client: ArxivClient, renderer: HtmlRenderer) -> Self {
        Self { client, renderer }
    }

    /// Fetch and normalize papers for a request.
    ///
    /// An empty query returns no papers without contacting arXiv.
    pub async fn search(&self, request: &SearchRequest) -> SearchResult<Vec<PaperRecord>> {
        if request.is_empty() {
            return Ok(Vec::new());
        }

        let expression = request.expression();
        tracing::info!(
            query = %request.trimmed_text(),
            categories = ?request.categories,
            "Searching arXiv"
        );

        let entries = self.client.search(&expression).await?;
        let papers = normalize_entries(entries);

        tracing::info!(count = papers.len(), "Search complete");
        Ok(papers)
    }

    /// Search and render the results page.
    pub async fn search_page(&self, request: &SearchRequest) -> SearchResult<String> {
        let papers = self.search(request).await?;
        self.renderer.render_search_page(&papers, request)
    }
}

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handle_search))
        .route("/health", get(health_check))
        .route_service("/favicon.ico", ServeFile::new(static_dir.join("favicon.svg")))
        .route_service("/manifest.json", ServeFile::new(static_dir.join("manifest.json")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_search(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> SearchResult<Html<String>> {
    let request = SearchRequest::from_query(raw.as_deref());
    state.search_page(&request).await.map(Html)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "arxiv-search",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
