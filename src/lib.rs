//! shopping-search: product recommendations backed by hybrid vector search
//!
//! A client for a remote dense/sparse vector search endpoint, a fan-out that
//! runs a batch of queries through it, and the tool and agent definitions an
//! external agent runtime uses to turn a shopping request into items.

pub mod agents;
pub mod config;
pub mod error;
pub mod network;
pub mod results;
pub mod search;
pub mod tools;
pub mod web;

pub use config::Settings;
pub use error::{FailureKind, SearchError};
pub use results::{Item, QueryOutcome, SearchReport};
pub use search::{FanOut, Lookup, SearchRequest, SearchResponse, VectorSearchClient};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Row limit sent with each query of a fan-out
pub const DEFAULT_ROWS_PER_QUERY: u32 = 3;
