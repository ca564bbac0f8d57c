//! Configuration loading for searxng-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variable SEARXNG_URL (endpoint only)
//! 2. Environment variable SEARXNG_CONFIG_PATH
//! 3. ~/.binks/searxng.toml
//! 4. Default values

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// SearXNG specific configuration
    #[serde(default)]
    pub searxng: SearXNGConfig,
}

/// SearXNG configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearXNGConfig {
    /// Full search endpoint, e.g. `http://localhost:3002/search`
    #[serde(default = "default_searxng_url")]
    pub url: String,
    /// Maximum number of results rendered in the output
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Collapse non-alphanumeric runs in the query to `_` before sending
    #[serde(default = "default_true")]
    pub normalize_query: bool,
    /// Fail on non-2xx responses instead of decoding whatever came back
    #[serde(default = "default_true")]
    pub strict_status: bool,
    /// Engines to use (comma-separated, empty = use instance defaults)
    #[serde(default)]
    pub engines: String,
}

// Default value functions
fn default_searxng_url() -> String {
    "http://localhost:3002/search".to_string()
}

fn default_max_results() -> usize {
    5
}

fn default_true() -> bool {
    true
}

impl Default for SearXNGConfig {
    fn default() -> Self {
        Self {
            url: default_searxng_url(),
            max_results: default_max_results(),
            normalize_query: default_true(),
            strict_status: default_true(),
            engines: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply SEARXNG_URL
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_path() {
            Some(path) => Self::load_from(&path)?,
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        config.apply_url_override(std::env::var("SEARXNG_URL").ok());
        Ok(config)
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// SearXNG URL from environment has the highest priority
    pub fn apply_url_override(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.searxng.url = url;
        }
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("SEARXNG_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.binks/searxng.toml
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".binks").join("searxng.toml"));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.searxng.url, "http://localhost:3002/search");
        assert_eq!(config.searxng.max_results, 5);
        assert!(config.searxng.normalize_query);
        assert!(config.searxng.strict_status);
        assert!(config.searxng.engines.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [searxng]
            url = "http://searx.lan:8888/search"
            normalize_query = false
            "#,
        )
        .unwrap();

        assert_eq!(config.searxng.url, "http://searx.lan:8888/search");
        assert!(!config.searxng.normalize_query);
        assert_eq!(config.searxng.max_results, 5);
        assert!(config.searxng.strict_status);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.searxng, SearXNGConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml_str("[searxng]\nmax_results = \"five\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[searxng]\nmax_results = 3\nstrict_status = false").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.searxng.max_results, 3);
        assert!(!config.searxng.strict_status);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.searxng, SearXNGConfig::default());
    }

    #[test]
    fn test_url_override() {
        let mut config = Config::default();

        config.apply_url_override(Some("  ".to_string()));
        assert_eq!(config.searxng.url, "http://localhost:3002/search");

        config.apply_url_override(Some("http://10.0.0.2:8080/search".to_string()));
        assert_eq!(config.searxng.url, "http://10.0.0.2:8080/search");

        config.apply_url_override(None);
        assert_eq!(config.searxng.url, "http://10.0.0.2:8080/search");
    }
}
