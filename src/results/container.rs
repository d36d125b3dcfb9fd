//! Aggregated report for a fan-out batch

use super::types::*;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Per-query outcomes of a batch, kept in query order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchReport {
    outcomes: Vec<QueryOutcome>,
}

impl SearchReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of the next query
    pub fn push(&mut self, outcome: QueryOutcome) {
        self.outcomes.push(outcome);
    }

    /// All outcomes in query order
    pub fn outcomes(&self) -> &[QueryOutcome] {
        &self.outcomes
    }

    /// Items of every successful query, concatenated in query order
    pub fn items(&self) -> Vec<Item> {
        self.outcomes
            .iter()
            .flat_map(|o| o.items().iter().cloned())
            .collect()
    }

    /// Consume the report, keeping only the flat item list
    pub fn into_items(self) -> Vec<Item> {
        self.outcomes
            .into_iter()
            .flat_map(|o| match o {
                QueryOutcome::Success { items, .. } => items,
                QueryOutcome::Failed { .. } => Vec::new(),
            })
            .collect()
    }

    /// Failed outcomes
    pub fn failures(&self) -> Vec<&QueryOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success()).collect()
    }

    pub fn query_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn item_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.items().len()).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_success()).count()
    }

    /// Every query failed (and there was at least one)
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.failed_count() == self.outcomes.len()
    }
}

impl Serialize for SearchReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SearchReport", 5)?;
        state.serialize_field("query_count", &self.query_count())?;
        state.serialize_field("item_count", &self.item_count())?;
        state.serialize_field("failed_count", &self.failed_count())?;
        state.serialize_field("items", &self.items())?;
        state.serialize_field("outcomes", &self.outcomes)?;
        state.end()
    }
}
