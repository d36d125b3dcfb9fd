//! Single-lookup client for the vector search service

use super::models::{SearchRequest, SearchResponse};
use crate::config::SearchSettings;
use crate::error::{Result, SearchError};
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Longest slice of an error body kept in a `Status` error
const MAX_ERROR_BODY: usize = 512;

/// Anything that can answer one query with a list of items
#[async_trait]
pub trait Lookup: Send + Sync {
    /// Run one query against the catalog
    async fn lookup(&self, query: &str, rows: Option<u32>) -> Result<SearchResponse>;

    /// Like `lookup`, but logs the failure and yields `None`
    async fn try_lookup(&self, query: &str, rows: Option<u32>) -> Option<SearchResponse> {
        match self.lookup(query, rows).await {
            Ok(response) => Some(response),
            Err(e) => {
                warn!("Lookup for {:?} failed: {}", query, e);
                None
            }
        }
    }
}

/// Client for the hybrid dense/sparse search endpoint
#[derive(Clone)]
pub struct VectorSearchClient {
    client: HttpClient,
    settings: SearchSettings,
}

impl VectorSearchClient {
    pub fn new(client: HttpClient, settings: SearchSettings) -> Self {
        Self { client, settings }
    }

    /// Endpoint every lookup is posted to
    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    /// Build the request body for a query
    pub fn request(&self, query: &str, rows: Option<u32>) -> SearchRequest {
        SearchRequest::from_settings(query, rows, &self.settings)
    }
}

#[async_trait]
impl Lookup for VectorSearchClient {
    async fn lookup(&self, query: &str, rows: Option<u32>) -> Result<SearchResponse> {
        let request = self.request(query, rows);
        debug!("POST {} query={:?} rows={:?}", self.endpoint(), query, rows);

        let response = self.client.post_json(self.endpoint(), &request).await?;

        if !response.is_success() {
            debug!("{} answered HTTP {}", response.url, response.status);
            let mut body = response.text;
            if body.len() > MAX_ERROR_BODY {
                let mut end = MAX_ERROR_BODY;
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                body.truncate(end);
            }
            return Err(SearchError::Status {
                status: response.status,
                body,
            });
        }

        let parsed = SearchResponse::parse(&response.text)?;
        debug!("Query {:?} returned {} items", query, parsed.len());
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_settings() {
        let settings = SearchSettings {
            endpoint: "http://localhost:9/search".to_string(),
            use_rerank: false,
            ..Default::default()
        };
        let client = VectorSearchClient::new(HttpClient::new().unwrap(), settings);
        let request = client.request("tea cups", Some(3));

        assert_eq!(client.endpoint(), "http://localhost:9/search");
        assert_eq!(request.query, "tea cups");
        assert_eq!(request.rows, Some(3));
        assert!(!request.use_rerank);
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported() {
        // Nothing listens on the discard port
        let settings = SearchSettings {
            endpoint: "http://127.0.0.1:9/search".to_string(),
            ..Default::default()
        };
        let client = VectorSearchClient::new(HttpClient::new().unwrap(), settings);

        let result = client.lookup("cups", Some(3)).await;
        assert!(matches!(result, Err(SearchError::Transport(_))));
        assert!(client.try_lookup("cups", Some(3)).await.is_none());
    }
}
