//! HTTP server for the search page.

pub mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;

use crate::client::ArxivClient;
use crate::formatters::HtmlRenderer;

pub use routes::{AppState, create_router};

/// Web server for arXiv search.
pub struct SearchServer {
    /// Handler state.
    state: Arc<AppState>,

    /// Directory holding favicon, manifest and stylesheet.
    static_dir: PathBuf,
}

impl SearchServer {
    /// Create a new server.
    ///
    /// # Errors
    ///
    /// Returns error if the page templates fail to compile.
    pub fn new(client: ArxivClient, static_dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let renderer = HtmlRenderer::new()?;
        let state = Arc::new(AppState::new(client, renderer));

        Ok(Self { state, static_dir: static_dir.into() })
    }

    /// Build the router without binding a socket.
    #[must_use]
    pub fn router(&self) -> Router {
        create_router(Arc::clone(&self.state), &self.static_dir)
    }

    /// Serve HTTP until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run_http(self, addr: SocketAddr) -> anyhow::Result<()> {
        if !self.static_dir.is_dir() {
            tracing::warn!(dir = %self.static_dir.display(), "Static directory not found");
        }

        let router = self.router();

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }

}

impl std::fmt::Debug for SearchServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchServer").field("static_dir", &self.static_dir).finish()
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
