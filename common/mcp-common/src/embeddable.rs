//! In-process tool dispatch
//!
//! [`EmbeddableMcp`] lets a host call an MCP server's tools directly, by
//! name, without spawning it as a subprocess. Hosts that only deal in
//! strings use [`EmbeddableMcp::call_text`].
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use searxng_mcp::SearxngMcpServer;
//!
//! let server = SearxngMcpServer::new(config)?;
//! let text = server
//!     .call_text("search", serde_json::json!({ "query": "rust async" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

use crate::result::collect_text;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with this name is registered on the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// The tool ran and reported failure in its result
    #[error("tool execution failed: {0}")]
    ExecutionError(String),

    /// Parameters did not deserialize into the tool's parameter type
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The tool handler returned an MCP error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be invoked in-process
///
/// Implementations must be `Send + Sync`; hosts may call tools from
/// several tasks at once.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name the host registers this server under
    fn server_name(&self) -> &str;

    /// All tools with their names, descriptions and input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Execute a tool by name with JSON parameters
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    /// Execute a tool and return its text output.
    ///
    /// A result flagged `is_error` becomes [`EmbeddableError::ExecutionError`].
    async fn call_text(&self, name: &str, params: Value) -> EmbeddableResult<String> {
        let result = self.call_tool(name, params).await?;
        let text = collect_text(&result);

        if result.is_error.unwrap_or(false) {
            return Err(EmbeddableError::ExecutionError(text));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::text_success;

    struct EchoServer;

    #[async_trait]
    impl EmbeddableMcp for EchoServer {
        fn server_name(&self) -> &str {
            "echo"
        }

        fn list_tools(&self) -> Vec<Tool> {
            vec![]
        }

        async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
            match name {
                "echo" => Ok(text_success(params["text"].as_str().unwrap_or_default())),
                "fail" => Ok(CallToolResult::error(vec![rmcp::model::Content::text(
                    "boom",
                )])),
                _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_call_text_returns_output() {
        let text = EchoServer
            .call_text("echo", serde_json::json!({ "text": "hello" }))
            .await
            .unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_call_text_surfaces_tool_failure() {
        let err = EchoServer
            .call_text("fail", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, EmbeddableError::ExecutionError(ref m) if m == "boom"));
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let result = EchoServer.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }
}
