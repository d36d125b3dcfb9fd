//! Wire models for the vector search service

use crate::config::SearchSettings;
use crate::error::{Result, SearchError};
use crate::results::Item;
use serde::{Deserialize, Serialize};

/// Request body for one lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    /// Query text, sent exactly as given
    pub query: String,
    /// Maximum number of items (null lets the service decide)
    pub rows: Option<u32>,
    /// Catalog identifier
    pub dataset_id: String,
    /// Dense (embedding) retrieval
    pub use_dense: bool,
    /// Sparse (lexical) retrieval
    pub use_sparse: bool,
    /// Fusion weight between dense and sparse rankings, in [0, 1]
    pub rrf_alpha: f64,
    /// Rerank the fused list
    pub use_rerank: bool,
}

impl SearchRequest {
    /// Build a request with the default catalog and retrieval flags
    pub fn new(query: impl Into<String>, rows: Option<u32>) -> Self {
        Self::from_settings(query, rows, &SearchSettings::default())
    }

    /// Build a request using configured catalog and retrieval flags
    pub fn from_settings(
        query: impl Into<String>,
        rows: Option<u32>,
        settings: &SearchSettings,
    ) -> Self {
        Self {
            query: query.into(),
            rows,
            dataset_id: settings.dataset_id.clone(),
            use_dense: settings.use_dense,
            use_sparse: settings.use_sparse,
            rrf_alpha: settings.rrf_alpha,
            use_rerank: settings.use_rerank,
        }
    }
}

/// Parsed response body of one lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub items: Vec<Item>,
}

impl SearchResponse {
    /// Parse a response body, distinguishing malformed JSON from a missing `items` array
    pub fn parse(text: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| SearchError::Parse(e.to_string()))?;

        match value.get("items") {
            Some(items) if items.is_array() => serde_json::from_value(value)
                .map_err(|e| SearchError::Parse(format!("unexpected items shape: {}", e))),
            _ => Err(SearchError::MissingItems),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
