//! Tool traits and types

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// A capability an agent runtime can call with JSON arguments
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the runtime calls the tool by
    fn name(&self) -> &str;

    /// Description shown to the model
    fn description(&self) -> &str;

    /// JSON schema of the arguments object
    fn parameters_schema(&self) -> Value;

    /// Run the tool
    async fn execute(&self, args: Value) -> anyhow::Result<Value>;

    /// Descriptor published to the runtime
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// Tool metadata for discovery
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}
