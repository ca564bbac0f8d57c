//! Error conversion for MCP tool implementations
//!
//! Tool handlers return `Result<_, McpError>`. Library crates implement
//! [`IntoMcpError`] for their own error types so handlers can use
//! [`ResultExt::to_mcp_err`] followed by `?`.

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Conversion of an error into the MCP error shape sent back to the client
///
/// Implement this for a crate's own error type to enable `?` in tool
/// handlers via [`ResultExt`].
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::{IntoMcpError, McpError};
///
/// impl IntoMcpError for SearchError {
///     fn into_mcp_error(self) -> McpError {
///         McpError::internal_error(format!("[{}] {}", self.stage(), self), None)
///     }
/// }
/// ```
pub trait IntoMcpError {
    /// Convert this error into an MCP error
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("JSON error: {}", self), None)
    }
}

impl IntoMcpError for anyhow::Error {
    fn into_mcp_error(self) -> McpError {
        // Alternate formatting keeps the cause chain
        McpError::internal_error(format!("{:#}", self), None)
    }
}

/// Extension trait adding `to_mcp_err()` to any `Result` whose error
/// implements [`IntoMcpError`]
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::{text_success, ResultExt};
///
/// async fn search(&self, query: &str) -> Result<CallToolResult, McpError> {
///     let output = self.client.search(query).await.to_mcp_err()?;
///     Ok(text_success(output))
/// }
/// ```
pub trait ResultExt<T> {
    /// Convert the error to an MCP error
    fn to_mcp_err(self) -> McpResult<T>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> McpResult<T> {
        self.map_err(IntoMcpError::into_mcp_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anyhow_keeps_context() {
        let err = anyhow::anyhow!("connection refused").context("upstream unreachable");
        let mcp = err.into_mcp_error();
        assert!(mcp.message.contains("upstream unreachable"));
        assert!(mcp.message.contains("connection refused"));
    }

    #[test]
    fn test_result_ext() {
        let result: Result<(), serde_json::Error> = serde_json::from_str::<()>("{");
        let err = result.to_mcp_err().unwrap_err();
        assert!(err.message.starts_with("JSON error"));
    }
}
