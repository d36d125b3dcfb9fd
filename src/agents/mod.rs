//! Agent definitions handed to the external agent runtime
//!
//! Two agents cooperate: a research agent that turns a shopping request into
//! search queries using the runtime's built-in web search, and a shopper agent
//! that calls the product search tool with those queries and writes the
//! recommendation. Only their configuration lives here.

mod session;

pub use session::SessionContext;

use serde::Serialize;

/// Configuration of one agent
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgentConfig {
    pub name: String,
    pub model: String,
    pub description: String,
    pub instructions: String,
    /// Tools from this crate the agent may call
    pub tools: Vec<String>,
    /// Whether the runtime's built-in web search is enabled
    pub web_search: bool,
}

const RESEARCH_INSTRUCTIONS: &str = r#"Your role is a market researcher for an e-commerce site with millions of items.

When you receive a search request from a user, use Google Search to research what kind of items people are purchasing for the user's intent.

Then, generate {count} queries finding those items on the e-commerce site and return them."#;

const SHOPPER_INSTRUCTIONS: &str = r#"Your role is a shopper's concierge for an e-commerce site with millions of items.

Follow the following steps:
1. Pass the user's request to the research agent and receive its queries.
2. Pass the list of queries to `{tool}`. It returns up to {rows} items per query.
3. Show the name, description and image of each item found, and explain why it fits the request.

Do not invent items that `{tool}` did not return."#;

/// Number of queries the research agent is asked to produce
pub const RESEARCH_QUERY_COUNT: usize = 5;

/// Fill `{key}` placeholders in an instruction template
pub fn render_instructions(template: &str, vars: &[(&str, String)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{}}}", key), value)
    })
}

/// Agent that researches the request and produces search queries
pub fn research_agent(model: &str) -> AgentConfig {
    AgentConfig {
        name: "research_agent".to_string(),
        model: model.to_string(),
        description: "A market researcher for an e-commerce site. Receives a search request \
                      from a user, and returns a list of search queries."
            .to_string(),
        instructions: render_instructions(
            RESEARCH_INSTRUCTIONS,
            &[("count", RESEARCH_QUERY_COUNT.to_string())],
        ),
        tools: vec![],
        web_search: true,
    }
}

/// Agent that searches the catalog and writes the recommendation
pub fn shopper_agent(model: &str, tool_name: &str, rows_per_query: u32) -> AgentConfig {
    AgentConfig {
        name: "shop_agent".to_string(),
        model: model.to_string(),
        description: "A shopper's concierge for an e-commerce site".to_string(),
        instructions: render_instructions(
            SHOPPER_INSTRUCTIONS,
            &[
                ("tool", tool_name.to_string()),
                ("rows", rows_per_query.to_string()),
            ],
        ),
        tools: vec![tool_name.to_string(), "research_agent".to_string()],
        web_search: false,
    }
}

/// Both agents, research first
pub fn default_agents(model: &str, tool_name: &str, rows_per_query: u32) -> Vec<AgentConfig> {
    vec![
        research_agent(model),
        shopper_agent(model, tool_name, rows_per_query),
    ]
}
