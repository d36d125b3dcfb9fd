//! Application state shared across handlers

use crate::agents::{default_agents, AgentConfig};
use crate::config::Settings;
use crate::network::HttpClient;
use crate::search::{FanOut, Lookup, VectorSearchClient};
use crate::tools::{ProductSearchTool, ToolRegistry, PRODUCT_SEARCH_TOOL};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded settings
    pub settings: Arc<Settings>,
    /// Single-lookup backend
    pub lookup: Arc<dyn Lookup>,
    /// Query fan-out
    pub fan_out: FanOut,
    /// Tools published to the agent runtime
    pub tools: Arc<ToolRegistry>,
    /// Agent definitions
    pub agents: Arc<Vec<AgentConfig>>,
}

impl AppState {
    /// Create state backed by the configured vector search endpoint
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let lookup = Arc::new(VectorSearchClient::new(client, settings.search.clone()));
        Self::with_lookup(settings, lookup)
    }

    /// Create state around any lookup backend
    pub fn with_lookup(settings: Settings, lookup: Arc<dyn Lookup>) -> Self {
        let fan_out = FanOut::new(lookup.clone()).with_rows(settings.search.rows_per_query);

        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(ProductSearchTool::new(fan_out.clone())));

        let agents = default_agents(
            &settings.agents.model,
            PRODUCT_SEARCH_TOOL,
            settings.search.rows_per_query,
        );

        Self {
            settings: Arc::new(settings),
            lookup,
            fan_out,
            tools: Arc::new(tools),
            agents: Arc::new(agents),
        }
    }

    /// Application name used for sessions
    pub fn app_name(&self) -> &str {
        &self.settings.general.app_name
    }
}
