//! SearXNG MCP Library
//!
//! Search via a local SearXNG instance, rendered as plain text for tool
//! callers.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use searxng_mcp::{Config, SearchClient};
//!
//! let client = SearchClient::new(&Config::load()?.searxng)?;
//! println!("{}", client.search("rust async runtimes").await?);
//! ```
//!
//! # Configuration
//! Set `SEARXNG_URL` env var or configure in `~/.binks/searxng.toml`

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod normalize;
pub mod server;
pub mod types;

pub use client::SearchClient;
pub use config::{Config, SearXNGConfig};
pub use error::{SearchError, SearchStage};
pub use format::{format_results, NO_RESULTS};
pub use normalize::QueryNormalizer;
pub use server::{SearchParams, SearxngMcpServer};
pub use types::{SearchResponse, SearchResult};

// Re-export EmbeddableMcp trait for in-process usage
pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
