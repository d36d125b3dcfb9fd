//! Search module
//!
//! The single-lookup client for the vector search service and the fan-out
//! executor that runs a batch of queries through it.

mod executor;
mod lookup;
mod models;

pub use executor::FanOut;
pub use lookup::{Lookup, VectorSearchClient};
pub use models::*;
