//! HTTP networking module
//!
//! Provides the HTTP client used to reach the vector search service.

mod client;
mod user_agent;

pub use client::{HttpClient, HttpResponse};
pub use user_agent::default_user_agent;
