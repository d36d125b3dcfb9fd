//! Error types for vector search lookups

use serde::{Deserialize, Serialize};

/// Errors that can occur while querying the vector search service
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request never produced a response (connect, DNS, timeout, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status
    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// The response parsed but carried no `items` array
    #[error("response has no items field")]
    MissingItems,

    /// Invalid settings
    #[error("config error: {0}")]
    Config(String),

    /// Tool or API arguments did not match the expected shape
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

impl SearchError {
    /// Coarse classification used in per-query outcomes
    pub fn kind(&self) -> FailureKind {
        match self {
            SearchError::Transport(_) => FailureKind::Network,
            SearchError::Status { .. } => FailureKind::HttpStatus,
            SearchError::Parse(_) => FailureKind::Parse,
            SearchError::MissingItems => FailureKind::MissingItems,
            SearchError::Config(_) | SearchError::InvalidArguments(_) => FailureKind::Other,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport(err.to_string())
    }
}

/// Why a single query in a batch failed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Network,
    HttpStatus,
    Parse,
    MissingItems,
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FailureKind::Network => "network error",
            FailureKind::HttpStatus => "HTTP error",
            FailureKind::Parse => "parse error",
            FailureKind::MissingItems => "missing items",
            FailureKind::Other => "error",
        };
        f.write_str(s)
    }
}

/// Convenience alias for lookup results
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = SearchError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "HTTP error 500: boom");
        assert_eq!(err.kind(), FailureKind::HttpStatus);
    }

    #[test]
    fn test_missing_items_kind() {
        assert_eq!(SearchError::MissingItems.kind(), FailureKind::MissingItems);
        assert_eq!(
            serde_json::to_value(FailureKind::MissingItems).unwrap(),
            serde_json::json!("missing_items")
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
