//! Result type definitions

use crate::error::{FailureKind, SearchError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog item as returned by the vector search service
///
/// Kept as the raw JSON object so every field, whatever its type, is written
/// back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// Create an item with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with("name", Value::String(name.into()))
    }

    /// Set a field
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// The item name, when the service sent it as a string
    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    /// Any field the service returned
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Outcome of one query within a fan-out batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    Success {
        query: String,
        items: Vec<Item>,
        elapsed_ms: u64,
    },
    Failed {
        query: String,
        kind: FailureKind,
        reason: String,
        elapsed_ms: u64,
    },
}

impl QueryOutcome {
    pub fn success(query: impl Into<String>, items: Vec<Item>, elapsed_ms: u64) -> Self {
        QueryOutcome::Success {
            query: query.into(),
            items,
            elapsed_ms,
        }
    }

    pub fn failed(query: impl Into<String>, error: &SearchError, elapsed_ms: u64) -> Self {
        QueryOutcome::Failed {
            query: query.into(),
            kind: error.kind(),
            reason: error.to_string(),
            elapsed_ms,
        }
    }

    /// The query this outcome belongs to
    pub fn query(&self) -> &str {
        match self {
            QueryOutcome::Success { query, .. } | QueryOutcome::Failed { query, .. } => query,
        }
    }

    /// Items found, empty for a failed query
    pub fn items(&self) -> &[Item] {
        match self {
            QueryOutcome::Success { items, .. } => items.as_slice(),
            QueryOutcome::Failed { .. } => &[],
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Success { .. })
    }
}
