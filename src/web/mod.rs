//! Web server module
//!
//! Serves the search endpoints and the tool interface used by the agent runtime.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
