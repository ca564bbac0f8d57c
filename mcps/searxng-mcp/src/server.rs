//! MCP Server implementation for SearXNG search
//!
//! Exposes the search client as an MCP tool (stdio) and as an
//! [`EmbeddableMcp`] for hosts that dispatch tools in-process.

use anyhow::Result;
use mcp_common::{
    async_trait, json_success, text_success, EmbeddableError, EmbeddableMcp, EmbeddableResult,
    McpError, ResultExt,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::SearchClient;
use crate::config::Config;

const DESCRIPTION: &str = "SearXNG Service - to query and retrieve search results from a \
     local SearXNG instance. Returns the top results as numbered text blocks.";

/// The main SearXNG MCP Server
#[derive(Clone)]
pub struct SearxngMcpServer {
    client: SearchClient,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// The search query
    #[schemars(description = "The search query string")]
    pub query: String,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl SearxngMcpServer {
    pub fn new(config: Config) -> Result<Self> {
        let client = SearchClient::new(&config.searxng)?;
        tracing::info!("Using SearXNG endpoint {}", client.endpoint());

        Ok(Self {
            client,
            tool_router: Self::tool_router(),
        })
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    #[tool(description = "Search the web through SearXNG. Returns numbered results with title, URL and snippet.")]
    async fn search(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Searching for: {}", params.query);

        let output = self.client.search(&params.query).await.to_mcp_err()?;

        Ok(text_success(output))
    }

    #[tool(description = "Get the SearXNG endpoint and search policy in use.")]
    async fn get_config(&self) -> Result<CallToolResult, McpError> {
        #[derive(Serialize)]
        struct ConfigStatus<'a> {
            endpoint: &'a str,
            max_results: usize,
            normalize_query: bool,
            strict_status: bool,
        }

        json_success(&ConfigStatus {
            endpoint: self.client.endpoint(),
            max_results: self.client.max_results(),
            normalize_query: self.client.normalizes_query(),
            strict_status: self.client.strict_status(),
        })
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SearxngMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(DESCRIPTION.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for SearxngMcpServer {
    fn server_name(&self) -> &str {
        "searxng"
    }

    fn server_description(&self) -> Option<&str> {
        Some(DESCRIPTION)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "search" => {
                let params: SearchParams = serde_json::from_value(params)?;
                self.search(Parameters(params)).await.map_err(Into::into)
            }

            "get_config" => self.get_config().await.map_err(Into::into),

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> SearxngMcpServer {
        SearxngMcpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_embeddable_server_name() {
        assert_eq!(server().server_name(), "searxng");
    }

    #[test]
    fn test_embeddable_list_tools() {
        let tools = server().list_tools();
        let tool_names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(tools.len(), 2);
        assert!(tool_names.contains(&"search"));
        assert!(tool_names.contains(&"get_config"));
    }

    #[tokio::test]
    async fn test_embeddable_get_config() {
        let text = server()
            .call_text("get_config", serde_json::json!({}))
            .await
            .unwrap();

        let status: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(status["endpoint"], "http://localhost:3002/search");
        assert_eq!(status["max_results"], 5);
        assert_eq!(status["strict_status"], true);
    }

    #[tokio::test]
    async fn test_embeddable_missing_query_param() {
        let result = server().call_tool("search", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::InvalidParams(_))));
    }

    #[tokio::test]
    async fn test_embeddable_unknown_tool() {
        let result = server()
            .call_tool("nonexistent_tool", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }
}
