//! HTTP request handlers

use super::state::AppState;
use crate::agents::SessionContext;
use crate::error::SearchError;
use crate::search::Lookup;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// Body for a single lookup
#[derive(Debug, Deserialize)]
pub struct LookupBody {
    pub query: String,
    pub rows: Option<u32>,
}

/// Body for a fan-out search
#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub queries: Vec<String>,
}

/// Body for opening a session
#[derive(Debug, Deserialize)]
pub struct SessionBody {
    pub user_id: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Single lookup handler
pub async fn lookup(State(state): State<AppState>, Json(body): Json<LookupBody>) -> Response {
    match state.lookup.lookup(&body.query, body.rows).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            tracing::warn!("Lookup for {:?} failed: {}", body.query, e);
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

/// Fan-out search handler
pub async fn search(State(state): State<AppState>, Json(body): Json<SearchBody>) -> Response {
    if body.queries.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "queries must not be empty");
    }

    let report = state.fan_out.execute(&body.queries).await;
    Json(report).into_response()
}

/// List tools
pub async fn list_tools(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.tools.descriptors())
}

/// Invoke a tool by name
pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(args): Json<Value>,
) -> Response {
    let Some(tool) = state.tools.get(&name) else {
        return error_response(StatusCode::NOT_FOUND, format!("unknown tool: {}", name));
    };

    match tool.execute(args).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => match e.downcast_ref::<SearchError>() {
            Some(SearchError::InvalidArguments(msg)) => {
                error_response(StatusCode::BAD_REQUEST, msg.clone())
            }
            _ => {
                tracing::error!("Tool {} failed: {}", name, e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        },
    }
}

/// List agent definitions
pub async fn list_agents(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "app_name": state.app_name(),
        "agents": &*state.agents,
    }))
}

/// Open a session; the caller keeps it and passes it back to the runtime
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<SessionBody>,
) -> impl IntoResponse {
    let session = SessionContext::new(state.app_name(), body.user_id);
    tracing::info!("Opened session {} for {}", session.session_id, session.user_id);
    (StatusCode::CREATED, Json(session))
}
