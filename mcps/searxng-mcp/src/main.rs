//! SearXNG MCP Server
//!
//! Search via a local SearXNG instance.
//!
//! # Usage
//!
//! Serve over stdio: `searxng-mcp`
//!
//! One-shot search: `searxng-mcp --query "rust borrow checker"`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "searxng": { "command": "./searxng-mcp" } } }
//! ```

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};

use searxng_mcp::{Config, SearchClient, SearxngMcpServer};

#[derive(Parser)]
#[command(name = "searxng-mcp")]
#[command(about = "Query a local SearXNG instance and print the top results")]
struct Cli {
    /// Run a single search, print the results and exit instead of serving MCP
    #[arg(short, long)]
    query: Option<String>,

    /// SearXNG search endpoint (default: from config or http://localhost:3002/search)
    #[arg(long, env = "SEARXNG_URL")]
    url: Option<String>,

    /// Maximum number of results to print
    #[arg(long)]
    max_results: Option<usize>,

    /// Send the query verbatim instead of collapsing symbols to `_`
    #[arg(long)]
    no_normalize: bool,

    /// Decode non-2xx responses instead of failing on them
    #[arg(long)]
    lenient_status: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        config.apply_url_override(self.url.clone());
        if let Some(max_results) = self.max_results {
            config.searxng.max_results = max_results;
        }
        if self.no_normalize {
            config.searxng.normalize_query = false;
        }
        if self.lenient_status {
            config.searxng.strict_status = false;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    mcp_common::init_tracing("searxng_mcp")?;

    let mut config = Config::load()?;
    cli.apply(&mut config);

    if let Some(query) = &cli.query {
        let client = SearchClient::new(&config.searxng)?;
        let output = client.search(query).await?;
        println!("{}", output);
        return Ok(());
    }

    tracing::info!("Starting SearXNG MCP Server");

    let server = SearxngMcpServer::new(config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
