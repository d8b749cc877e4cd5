//! arXiv Search
//!
//! A small web front end for the public arXiv API. Users type a free-text
//! query, optionally narrow it to subject categories, and get a styled HTML
//! page of matching papers, newest first.
//!
//! # Features
//!
//! - **Category filters**: curated catalog of arXiv subject codes
//! - **Polite client**: bounded page size, inter-page delay, bounded retries
//! - **Safe rendering**: auto-escaping `minijinja` templates
//!
//! # Example
//!
//! ```no_run
//! use arxiv_search::{client::ArxivClient, config::Config, query::build_query};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ArxivClient::new(Config::from_env()?)?;
//!     let expression = build_query("diffusion models", &["cs.LG".to_string()]);
//!     let entries = client.search(&expression).await?;
//!     println!("{} entries", entries.len());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod normalize;
pub mod query;
pub mod server;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, SearchError};
