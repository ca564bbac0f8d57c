//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sets up stderr logging
//! - **Results**: helpers for building and reading `CallToolResult`
//! - **Errors**: [`IntoMcpError`] / [`ResultExt`] for `?` in tool handlers
//! - **Embeddable**: [`EmbeddableMcp`] for in-process, string-in/string-out
//!   tool dispatch

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{IntoMcpError, McpResult, ResultExt};
pub use init::{init_tracing, LogFormat};
pub use result::{collect_text, json_success, text_success};

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
