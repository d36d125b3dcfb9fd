//! shopping-search: product recommendations backed by hybrid vector search
//!
//! With query arguments, runs one fan-out and prints the report as JSON.
//! Without arguments, serves the search and tool API.

use anyhow::Result;
use shopping_search::{
    config::{self, Settings},
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("-h") | Some("--help") => {
            print_usage();
            return Ok(());
        }
        Some("-V") | Some("--version") => {
            println!("shopping-search {}", shopping_search::VERSION);
            return Ok(());
        }
        _ => {}
    }

    // Load configuration
    let settings_path = config::find_settings_file();
    let (settings, ignored_overrides) = config::load(settings_path.as_deref())?;

    // Initialize logging
    let default_level = if settings.general.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting shopping-search v{}", shopping_search::VERSION);
    match settings_path {
        Some(ref path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }
    for var in &ignored_overrides {
        warn!("Ignoring unparsable environment override {}", var);
    }
    info!(
        "Vector search endpoint: {} (dataset {})",
        settings.search.endpoint, settings.search.dataset_id
    );

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;

    if args.is_empty() {
        serve(settings, client).await
    } else {
        run_once(settings, client, &args).await
    }
}

/// Run one fan-out over the given queries and print the report
async fn run_once(settings: Settings, client: HttpClient, queries: &[String]) -> Result<()> {
    let state = AppState::new(settings, client);
    let report = state.fan_out.execute(queries).await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    let failed: Vec<&str> = report.failures().iter().map(|o| o.query()).collect();
    if report.all_failed() {
        anyhow::bail!("all {} queries failed", report.query_count());
    }
    if !failed.is_empty() {
        warn!("Partial results, failed queries: {}", failed.join(", "));
    }
    Ok(())
}

/// Serve the HTTP API
async fn serve(settings: Settings, client: HttpClient) -> Result<()> {
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    let state = AppState::new(settings, client);
    info!("Registered tools: {}", state.tools.names().join(", "));
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
shopping-search v{}
Product recommendations backed by hybrid vector search

USAGE:
    shopping-search                      Serve the search and tool API
    shopping-search <QUERY> [QUERY...]   Run one search and print the report

OPTIONS:
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    SHOPPING_SEARCH_SETTINGS_PATH  Path to settings.yml
    SHOPPING_SEARCH_ENDPOINT       Vector search endpoint URL
    SHOPPING_SEARCH_DATASET_ID     Catalog identifier
    SHOPPING_SEARCH_ROWS           Rows per query
    SHOPPING_SEARCH_PORT           Server port
    SHOPPING_SEARCH_BIND_ADDRESS   Bind address
    SHOPPING_SEARCH_MODEL          Model named in the agent definitions
    SHOPPING_SEARCH_DEBUG          Enable debug logging (true/false, 1/0, yes/no)
    RUST_LOG                       Log filter (overrides the debug flag)
"#,
        shopping_search::VERSION
    );
}
