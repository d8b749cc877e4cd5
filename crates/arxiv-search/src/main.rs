//! arXiv Search - Entry Point

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_search::{ArxivClient, config::Config, server::SearchServer};

#[derive(Parser, Debug)]
#[command(name = "arxiv-search")]
#[command(about = "Web search front end for the arXiv API")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: IpAddr,

    /// HTTP server port
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Directory with favicon, manifest and stylesheet
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/static"), env = "STATIC_DIR")]
    static_dir: PathBuf,

    /// Papers fetched per search (1-50)
    #[arg(long, env = "ARXIV_MAX_RESULTS")]
    max_results: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting arXiv search");

    let mut config = Config::from_env()?;
    if let Some(max_results) = cli.max_results {
        config = config.with_max_results(max_results);
    }
    tracing::info!(
        api_url = %config.api_url,
        max_results = config.max_results,
        page_delay = ?config.page_delay,
        "arXiv client configured"
    );

    let client = ArxivClient::new(config)?;
    let server = SearchServer::new(client, cli.static_dir)?;

    server.run_http(SocketAddr::new(cli.host, cli.port)).await
}
