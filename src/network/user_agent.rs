//! User agent and accept headers

/// User agent sent to the search service, with an optional suffix
pub fn default_user_agent(suffix: Option<&str>) -> String {
    match suffix {
        Some(s) if !s.trim().is_empty() => {
            format!("shopping-search/{} ({})", crate::VERSION, s.trim())
        }
        _ => format!("shopping-search/{}", crate::VERSION),
    }
}

/// Standard accept header for JSON requests
pub fn accept_json() -> &'static str {
    "application/json"
}
