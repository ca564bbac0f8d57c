//! SearXNG search client
//!
//! One call is one GET against the configured endpoint:
//! `{endpoint}?q={query}&format=json`. The JSON body is decoded and the top
//! results are rendered as text. Nothing is cached and nothing is retried.
//! See: https://docs.searxng.org/dev/search_api.html

use reqwest::Client;
use url::Url;

use crate::config::SearXNGConfig;
use crate::error::SearchError;
use crate::format::format_results;
use crate::normalize::QueryNormalizer;
use crate::types::SearchResponse;

/// Client for a SearXNG instance
///
/// Configuration is fixed at construction. Clones share the underlying
/// connection pool and nothing else, so concurrent searches need no
/// coordination.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: String,
    max_results: usize,
    normalizer: Option<QueryNormalizer>,
    strict_status: bool,
    engines: String,
}

impl SearchClient {
    pub fn new(config: &SearXNGConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .build()
            .map_err(SearchError::RequestBuild)?;

        Ok(Self {
            client,
            endpoint: config.url.clone(),
            max_results: config.max_results,
            normalizer: config.normalize_query.then(QueryNormalizer::new),
            strict_status: config.strict_status,
            engines: config.engines.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn normalizes_query(&self) -> bool {
        self.normalizer.is_some()
    }

    pub fn strict_status(&self) -> bool {
        self.strict_status
    }

    /// Apply the normalization policy; the raw query is used verbatim when
    /// normalization is off
    pub fn prepare_query(&self, query: &str) -> String {
        match &self.normalizer {
            Some(normalizer) => normalizer.normalize(query),
            None => query.to_string(),
        }
    }

    /// Build the request URL for an already prepared query.
    ///
    /// Parameters already present on the endpoint are kept; `q` and
    /// `format=json` are appended percent-encoded.
    pub fn build_url(&self, query: &str) -> Result<Url, SearchError> {
        let invalid = |reason: String| SearchError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };

        let mut url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
        }

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query).append_pair("format", "json");
            if !self.engines.is_empty() {
                pairs.append_pair("engines", &self.engines);
            }
        }

        Ok(url)
    }

    /// Query the instance and decode the response
    pub async fn fetch(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let query = self.prepare_query(query);
        let url = self.build_url(&query)?;

        tracing::debug!(%url, "Querying SearXNG");

        let request = self
            .client
            .get(url)
            .build()
            .map_err(SearchError::RequestBuild)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(SearchError::Transport)?;

        let status = response.status();
        if self.strict_status && !status.is_success() {
            let body = match response.text().await {
                Ok(text) => truncate_body(text),
                Err(e) => {
                    tracing::debug!(%status, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            return Err(SearchError::Status { status, body });
        }

        let body = response.bytes().await.map_err(SearchError::BodyRead)?;
        let parsed: SearchResponse = serde_json::from_slice(&body).map_err(SearchError::Decode)?;

        tracing::debug!(%status, results = parsed.results.len(), "SearXNG response decoded");

        Ok(parsed)
    }

    /// Query the instance and render the top results as text.
    ///
    /// Zero results is a successful `"No results found."`.
    pub async fn search(&self, query: &str) -> Result<String, SearchError> {
        let response = self.fetch(query).await?;
        Ok(format_results(&response, self.max_results))
    }
}

/// Longest upstream body kept in a [`SearchError::Status`]
const MAX_ERROR_BODY: usize = 512;

fn truncate_body(mut body: String) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body;
    }

    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body.truncate(end);
    body.push_str("...");
    body
}
