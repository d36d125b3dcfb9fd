//! Product search tool
//!
//! Takes a list of search queries and returns the catalog items found for
//! all of them, in query order.

use super::traits::Tool;
use crate::error::SearchError;
use crate::search::FanOut;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// Name the tool is registered under
pub const PRODUCT_SEARCH_TOOL: &str = "find_shopping_items";

#[derive(Debug, Deserialize)]
struct ProductSearchArgs {
    queries: Vec<String>,
}

/// Exposes the query fan-out to an agent runtime
pub struct ProductSearchTool {
    fan_out: FanOut,
}

impl ProductSearchTool {
    pub fn new(fan_out: FanOut) -> Self {
        Self { fan_out }
    }

    fn parse_args(args: Value) -> Result<Vec<String>, SearchError> {
        let args: ProductSearchArgs = serde_json::from_value(args)
            .map_err(|e| SearchError::InvalidArguments(e.to_string()))?;
        if args.queries.is_empty() {
            return Err(SearchError::InvalidArguments(
                "queries must contain at least one query".into(),
            ));
        }
        Ok(args.queries)
    }
}

#[async_trait]
impl Tool for ProductSearchTool {
    fn name(&self) -> &str {
        PRODUCT_SEARCH_TOOL
    }

    fn description(&self) -> &str {
        "Find shopping items from the e-commerce catalog for a list of search queries. \
         Returns the items found for every query, each with a name, description and image_url."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "queries": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Search queries, one per product idea"
                }
            },
            "required": ["queries"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<Value> {
        let queries = Self::parse_args(args)?;
        let items = self.fan_out.find_items(&queries).await;
        Ok(serde_json::to_value(items)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let queries =
            ProductSearchTool::parse_args(json!({"queries": ["mugs", "cups"]})).unwrap();
        assert_eq!(queries, vec!["mugs", "cups"]);

        assert!(ProductSearchTool::parse_args(json!({"queries": []})).is_err());
        assert!(ProductSearchTool::parse_args(json!({"query": "mugs"})).is_err());
        assert!(ProductSearchTool::parse_args(json!({"queries": "mugs"})).is_err());
    }
}
