//! Query fan-out: one lookup per query, results concatenated in order

use super::lookup::Lookup;
use crate::results::{Item, QueryOutcome, SearchReport};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs a batch of queries against a lookup backend, one after another
#[derive(Clone)]
pub struct FanOut {
    lookup: Arc<dyn Lookup>,
    rows_per_query: u32,
}

impl FanOut {
    /// Create a fan-out with the default row limit
    pub fn new(lookup: Arc<dyn Lookup>) -> Self {
        Self {
            lookup,
            rows_per_query: crate::DEFAULT_ROWS_PER_QUERY,
        }
    }

    /// Set the row limit sent with each query
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows_per_query = rows;
        self
    }

    pub fn rows_per_query(&self) -> u32 {
        self.rows_per_query
    }

    /// Execute every query in order and collect a per-query report
    ///
    /// A query is only sent once the previous response has been consumed.
    /// Failed queries are recorded and skipped; they never abort the batch.
    pub async fn execute<S: AsRef<str>>(&self, queries: &[S]) -> SearchReport {
        let mut report = SearchReport::new();

        info!(
            "Searching for {} queries with {} rows each",
            queries.len(),
            self.rows_per_query
        );

        for query in queries {
            let query = query.as_ref();
            let start = Instant::now();
            let result = self.lookup.lookup(query, Some(self.rows_per_query)).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            let outcome = match result {
                Ok(response) => {
                    debug!(
                        "Query {:?} returned {} items in {}ms",
                        query,
                        response.len(),
                        elapsed_ms
                    );
                    QueryOutcome::success(query, response.items, elapsed_ms)
                }
                Err(e) => {
                    warn!("Query {:?} failed: {}", query, e);
                    QueryOutcome::failed(query, &e, elapsed_ms)
                }
            };
            report.push(outcome);
        }

        info!(
            "Found {} items for {} queries ({} failed)",
            report.item_count(),
            report.query_count(),
            report.failed_count()
        );

        report
    }

    /// Execute every query and return only the flat item list
    pub async fn find_items<S: AsRef<str>>(&self, queries: &[S]) -> Vec<Item> {
        self.execute(queries).await.into_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FailureKind, Result, SearchError};
    use crate::search::SearchResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Answers from a script and records every call
    struct ScriptedLookup {
        calls: Mutex<Vec<(String, Option<u32>)>>,
    }

    impl ScriptedLookup {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, Option<u32>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Lookup for ScriptedLookup {
        async fn lookup(&self, query: &str, rows: Option<u32>) -> Result<SearchResponse> {
            self.calls.lock().unwrap().push((query.to_string(), rows));
            match query {
                "broken" => Err(SearchError::Status {
                    status: 500,
                    body: "internal".into(),
                }),
                "no items" => Err(SearchError::MissingItems),
                _ => Ok(SearchResponse {
                    items: (1..=3)
                        .map(|i| Item::new(format!("{} #{}", query, i)))
                        .collect(),
                }),
            }
        }
    }

    fn names(items: &[Item]) -> Vec<String> {
        items
            .iter()
            .filter_map(|i| i.name().map(str::to_string))
            .collect()
    }

    #[tokio::test]
    async fn test_one_call_per_query_in_order() {
        let lookup = ScriptedLookup::new();
        let fan_out = FanOut::new(lookup.clone());

        let queries = ["Cups with dancing people", "Cups with dancing animals"];
        let items = fan_out.find_items(&queries).await;

        assert_eq!(
            lookup.calls(),
            vec![
                ("Cups with dancing people".to_string(), Some(3)),
                ("Cups with dancing animals".to_string(), Some(3)),
            ]
        );
        assert_eq!(items.len(), 6);
        assert_eq!(
            names(&items),
            vec![
                "Cups with dancing people #1",
                "Cups with dancing people #2",
                "Cups with dancing people #3",
                "Cups with dancing animals #1",
                "Cups with dancing animals #2",
                "Cups with dancing animals #3",
            ]
        );
    }

    #[tokio::test]
    async fn test_failures_are_isolated() {
        let lookup = ScriptedLookup::new();
        let fan_out = FanOut::new(lookup.clone()).with_rows(5);

        let report = fan_out
            .execute(&[
                "first".to_string(),
                "broken".to_string(),
                "no items".to_string(),
                "last".to_string(),
            ])
            .await;

        assert_eq!(lookup.calls().len(), 4);
        assert!(lookup.calls().iter().all(|(_, rows)| *rows == Some(5)));
        assert_eq!(report.query_count(), 4);
        assert_eq!(report.failed_count(), 2);
        assert_eq!(report.item_count(), 6);

        let kinds: Vec<_> = report
            .outcomes()
            .iter()
            .filter_map(|o| match o {
                QueryOutcome::Failed { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect();
        assert_eq!(kinds, vec![FailureKind::HttpStatus, FailureKind::MissingItems]);
        assert_eq!(names(&report.items())[3], "last #1");
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let lookup = ScriptedLookup::new();
        let fan_out = FanOut::new(lookup.clone());
        let report = fan_out.execute::<&str>(&[]).await;

        assert!(lookup.calls().is_empty());
        assert_eq!(report.query_count(), 0);
    }
}
