//! HTTP API tests, driving the router directly

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use shopping_search::error::Result;
use shopping_search::web::{create_router, AppState};
use shopping_search::{Item, Lookup, SearchError, SearchResponse, Settings};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Three items per query, except for the query "down"
#[derive(Default)]
struct FakeCatalog {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl Lookup for FakeCatalog {
    async fn lookup(&self, query: &str, rows: Option<u32>) -> Result<SearchResponse> {
        self.calls.lock().unwrap().push(query.to_string());
        if query == "down" {
            return Err(SearchError::Status {
                status: 500,
                body: String::new(),
            });
        }
        let rows = rows.unwrap_or(10);
        Ok(SearchResponse {
            items: (1..=rows)
                .map(|i| {
                    Item::new(format!("{} {}", query, i))
                        .with("description", "fake item")
                        .with("image_url", "https://img/x.jpg")
                })
                .collect(),
        })
    }
}

fn app() -> (axum::Router, Arc<FakeCatalog>) {
    let catalog = Arc::new(FakeCatalog::default());
    let state = AppState::with_lookup(Settings::default(), catalog.clone());
    (create_router(state), catalog)
}

async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let (status, body) = send(app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_search_report() {
    let (app, catalog) = app();
    let (status, body) = send(
        app,
        "POST",
        "/search",
        Some(json!({"queries": ["mugs", "down", "cups"]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query_count"], 3);
    assert_eq!(body["item_count"], 6);
    assert_eq!(body["failed_count"], 1);
    assert_eq!(body["items"][3]["name"], "cups 1");
    assert_eq!(body["outcomes"][1]["status"], "failed");
    assert_eq!(*catalog.calls.lock().unwrap(), vec!["mugs", "down", "cups"]);
}

#[tokio::test]
async fn test_search_rejects_empty_queries() {
    let (app, catalog) = app();
    let (status, body) = send(app, "POST", "/search", Some(json!({"queries": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(catalog.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_lookup_endpoint() {
    let (app, _) = app();
    let (status, body) = send(
        app.clone(),
        "POST",
        "/lookup",
        Some(json!({"query": "mugs", "rows": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);

    let (status, _) = send(app, "POST", "/lookup", Some(json!({"query": "down"}))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_tool_discovery_and_call() {
    let (app, _) = app();

    let (status, tools) = send(app.clone(), "GET", "/tools", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tools[0]["name"], "find_shopping_items");
    assert_eq!(tools[0]["parameters"]["required"][0], "queries");

    let (status, items) = send(
        app.clone(),
        "POST",
        "/tools/find_shopping_items",
        Some(json!({"queries": ["Cups with dancing people", "Cups with dancing animals"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["name"], "Cups with dancing people 1");
    assert_eq!(items[5]["name"], "Cups with dancing animals 3");

    let (status, _) = send(
        app.clone(),
        "POST",
        "/tools/find_shopping_items",
        Some(json!({"queries": "not a list"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app, "POST", "/tools/unknown", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_agents_and_sessions() {
    let (app, _) = app();

    let (status, body) = send(app.clone(), "GET", "/agents", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["app_name"], "shopping-search");
    assert_eq!(body["agents"][0]["name"], "research_agent");
    assert_eq!(body["agents"][1]["tools"][0], "find_shopping_items");

    let (status, session) = send(app, "POST", "/sessions", Some(json!({"user_id": "u1"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(session["user_id"], "u1");
    assert!(session["session_id"].is_string());
}
