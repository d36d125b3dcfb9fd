//! Explicit session context passed to whoever drives the agents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Identity and state of one conversation with the agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub app_name: String,
    pub user_id: String,
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Free-form state the runtime may read and write
    #[serde(default)]
    pub state: HashMap<String, serde_json::Value>,
}

impl SessionContext {
    /// Start a new session
    pub fn new(app_name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            user_id: user_id.into(),
            session_id: Uuid::new_v4(),
            created_at: Utc::now(),
            state: HashMap::new(),
        }
    }
}
