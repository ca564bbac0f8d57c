//! Builders for `CallToolResult` responses

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

/// Successful response carrying `data` as pretty-printed JSON
///
/// Replaces the serialize-then-wrap pattern:
/// ```rust,ignore
/// let json = serde_json::to_string_pretty(&data)
///     .map_err(|e| McpError::internal_error(e.to_string(), None))?;
/// Ok(CallToolResult::success(vec![Content::text(json)]))
/// ```
///
/// # Returns
///
/// * `Ok(CallToolResult)` with one text item
/// * `Err(McpError)` if serialization fails
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::json_success;
///
/// #[derive(Serialize)]
/// struct ConfigStatus { endpoint: String, max_results: usize }
///
/// fn get_config(&self) -> Result<CallToolResult, McpError> {
///     json_success(&ConfigStatus { endpoint: self.endpoint.clone(), max_results: 5 })
/// }
/// ```
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Successful response carrying a single text item
///
/// For tools whose output is already rendered for a human or an LLM.
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::text_success;
///
/// fn search(&self) -> Result<CallToolResult, McpError> {
///     Ok(text_success("No results found."))
/// }
/// ```
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Concatenate the text items of a tool result, newline-separated.
/// Non-text content (images, resources) is skipped.
///
/// This is the inverse of [`text_success`] for hosts that only deal in
/// strings:
///
/// ```rust,ignore
/// let result = server.call_tool("search", json!({ "query": "rust" })).await?;
/// println!("{}", mcp_common::collect_text(&result));
/// ```
pub fn collect_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text().map(|t| t.text.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}
