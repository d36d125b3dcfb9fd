//! Result types and the batch report
//!
//! Catalog items as returned by the search service, per-query outcomes and the
//! report that aggregates them.

mod container;
mod types;

pub use container::SearchReport;
pub use types::*;
