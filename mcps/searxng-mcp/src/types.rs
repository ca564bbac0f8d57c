//! SearXNG JSON response types
//!
//! Only the fields the tool renders are decoded; everything else in the
//! payload (`number_of_results`, `infoboxes`, per-result `engine`, ...)
//! is ignored. Both the response and each result must be JSON objects.
//! Missing and `null` fields decode as empty.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single search result, in upstream rank order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    /// Snippet or summary
    pub content: String,
}

/// Decoded `format=json` payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    /// The query as echoed back by the instance
    pub query: String,
    pub results: Vec<SearchResult>,
}

// Wire shapes: SearXNG sends `null` for absent snippets
#[derive(Deserialize)]
struct SearXNGResult {
    title: Option<String>,
    url: Option<String>,
    content: Option<String>,
}

#[derive(Deserialize)]
struct SearXNGResponse {
    query: Option<String>,
    results: Option<Vec<SearchResult>>,
}

/// Derived struct impls also accept a JSON array; go through a map so only
/// objects decode.
fn from_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let map = Map::<String, Value>::deserialize(deserializer)?;
    serde_json::from_value(Value::Object(map)).map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for SearchResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: SearXNGResult = from_object(deserializer)?;
        Ok(Self {
            title: raw.title.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for SearchResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: SearXNGResponse = from_object(deserializer)?;
        Ok(Self {
            query: raw.query.unwrap_or_default(),
            results: raw.results.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = r#"{
            "query": "rust",
            "number_of_results": 0,
            "results": [
                {"title": "Rust", "url": "https://www.rust-lang.org/", "content": "A language", "engine": "duckduckgo", "score": 1.5}
            ],
            "infoboxes": []
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.query, "rust");
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].url, "https://www.rust-lang.org/");
    }

    #[test]
    fn test_decode_missing_results_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
        assert!(response.query.is_empty());
    }

    #[test]
    fn test_decode_missing_content_is_empty() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"results": [{"title": "t", "url": "u"}]}"#).unwrap();
        assert_eq!(response.results[0].content, "");
    }

    #[test]
    fn test_decode_null_fields_are_empty() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"query": null, "results": [{"title": "t", "url": "u", "content": null}]}"#,
        )
        .unwrap();
        assert_eq!(response.query, "");
        assert_eq!(response.results[0].title, "t");
        assert_eq!(response.results[0].content, "");

        let response: SearchResponse =
            serde_json::from_str(r#"{"query": "q", "results": null}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_decode_wrong_shape_fails() {
        assert!(serde_json::from_str::<SearchResponse>(r#"{"results": "nope"}"#).is_err());
        assert!(serde_json::from_str::<SearchResponse>("[]").is_err());
        assert!(serde_json::from_str::<SearchResponse>(r#"["q", []]"#).is_err());
        assert!(serde_json::from_str::<SearchResponse>(r#"{"results": [["t", "u", "c"]]}"#).is_err());
        assert!(serde_json::from_str::<SearchResponse>("\"text\"").is_err());
    }
}
