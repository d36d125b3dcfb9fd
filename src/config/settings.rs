//! Settings structures for shopping-search configuration

use crate::error::SearchError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use url::Url;

/// Catalog searched when no dataset is configured
pub const DEFAULT_DATASET_ID: &str = "mercari3m_mm";

/// Largest accepted request timeout, in seconds
pub const MAX_REQUEST_TIMEOUT: f64 = 3600.0;

/// Parse a boolean flag, accepting the usual spellings
fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Main settings structure, loaded from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub search: SearchSettings,
    pub agents: AgentSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SHOPPING_SEARCH_* prefix)
    ///
    /// Returns the overrides that were set but could not be parsed.
    pub fn merge_env(&mut self) -> Vec<String> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source
    pub fn merge_vars<F>(&mut self, var: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ignored = Vec::new();

        if let Some(val) = var("SHOPPING_SEARCH_DEBUG") {
            match parse_bool(&val) {
                Some(debug) => self.general.debug = debug,
                None => ignored.push(format!("SHOPPING_SEARCH_DEBUG={}", val)),
            }
        }
        if let Some(val) = var("SHOPPING_SEARCH_ENDPOINT") {
            self.search.endpoint = val;
        }
        if let Some(val) = var("SHOPPING_SEARCH_DATASET_ID") {
            self.search.dataset_id = val;
        }
        if let Some(val) = var("SHOPPING_SEARCH_ROWS") {
            match val.parse() {
                Ok(rows) => self.search.rows_per_query = rows,
                Err(_) => ignored.push(format!("SHOPPING_SEARCH_ROWS={}", val)),
            }
        }
        if let Some(val) = var("SHOPPING_SEARCH_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => ignored.push(format!("SHOPPING_SEARCH_PORT={}", val)),
            }
        }
        if let Some(val) = var("SHOPPING_SEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = var("SHOPPING_SEARCH_MODEL") {
            self.agents.model = val;
        }

        ignored
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> std::result::Result<(), SearchError> {
        Url::parse(&self.search.endpoint).map_err(|e| {
            SearchError::Config(format!("invalid endpoint {:?}: {}", self.search.endpoint, e))
        })?;

        if !(0.0..=1.0).contains(&self.search.rrf_alpha) {
            return Err(SearchError::Config(format!(
                "rrf_alpha must be within [0, 1], got {}",
                self.search.rrf_alpha
            )));
        }
        if self.search.rows_per_query == 0 {
            return Err(SearchError::Config("rows_per_query must be > 0".into()));
        }
        if let Some(secs) = self.outgoing.request_timeout {
            if !secs.is_finite() || secs <= 0.0 || secs > MAX_REQUEST_TIMEOUT {
                return Err(SearchError::Config(format!(
                    "request_timeout must be within (0, {}] seconds, got {}",
                    MAX_REQUEST_TIMEOUT, secs
                )));
            }
        }
        if self.search.dataset_id.trim().is_empty() {
            return Err(SearchError::Config("dataset_id must not be empty".into()));
        }
        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Name used as the agent application name
    pub app_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            app_name: "shopping-search".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub port: u16,
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds (none = transport default)
    pub request_timeout: Option<f64>,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Appended to the default user agent
    pub useragent_suffix: Option<String>,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send with every lookup
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            pool_maxsize: 10,
            useragent_suffix: None,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Vector search service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Search endpoint URL
    pub endpoint: String,
    /// Catalog identifier
    pub dataset_id: String,
    /// Use dense (embedding) retrieval
    pub use_dense: bool,
    /// Use sparse (lexical) retrieval
    pub use_sparse: bool,
    /// Reciprocal rank fusion weight between dense and sparse
    pub rrf_alpha: f64,
    /// Rerank fused results
    pub use_rerank: bool,
    /// Row limit for each query in a fan-out
    pub rows_per_query: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000/search".to_string(),
            dataset_id: DEFAULT_DATASET_ID.to_string(),
            use_dense: true,
            use_sparse: true,
            rrf_alpha: 0.5,
            use_rerank: true,
            rows_per_query: crate::DEFAULT_ROWS_PER_QUERY,
        }
    }
}

/// Agent definition settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// Hosted model used by both agents
    pub model: String,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
        }
    }
}
