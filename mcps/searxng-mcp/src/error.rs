//! Error types for SearXNG searches
//!
//! Each variant corresponds to one stage of the request pipeline and keeps
//! the underlying cause. Nothing is retried; the first failure is returned.

use mcp_common::{IntoMcpError, McpError};
use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while querying SearXNG
#[derive(Error, Debug)]
pub enum SearchError {
    /// The configured endpoint is not a usable http(s) URL
    #[error("error creating request: invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured
        endpoint: String,
        /// Why it was rejected
        reason: String,
    },

    /// The HTTP client or request could not be built
    #[error("error creating request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    /// Connection refused, DNS failure, timeout
    #[error("error sending request: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-2xx status (strict status checking only)
    #[error("SearXNG error {status}: {body}")]
    Status {
        /// HTTP status returned by the instance
        status: StatusCode,
        /// Response body, for diagnostics
        body: String,
    },

    /// The body stream failed part-way through
    #[error("error reading response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The body was not the expected JSON shape
    #[error("error parsing JSON response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Pipeline stage a [`SearchError`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStage {
    RequestBuild,
    Transport,
    Status,
    BodyRead,
    Decode,
}

impl fmt::Display for SearchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStage::RequestBuild => "request_build",
            SearchStage::Transport => "transport",
            SearchStage::Status => "status",
            SearchStage::BodyRead => "body_read",
            SearchStage::Decode => "decode",
        };
        f.write_str(name)
    }
}

impl SearchError {
    pub fn stage(&self) -> SearchStage {
        match self {
            SearchError::InvalidEndpoint { .. } | SearchError::RequestBuild(_) => {
                SearchStage::RequestBuild
            }
            SearchError::Transport(_) => SearchStage::Transport,
            SearchError::Status { .. } => SearchStage::Status,
            SearchError::BodyRead(_) => SearchStage::BodyRead,
            SearchError::Decode(_) => SearchStage::Decode,
        }
    }
}

impl IntoMcpError for SearchError {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("[{}] {}", self.stage(), self), None)
    }
}
