//! Configuration module for shopping-search
//!
//! Handles loading and validating settings from YAML files and environment variables.
//! Settings are handed to the components that need them; nothing is kept in a global.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "SHOPPING_SEARCH_SETTINGS_PATH";

/// Load settings from a file (or defaults), apply environment overrides and validate
///
/// Also returns the environment overrides that were set but could not be parsed,
/// so the caller can report them once logging is up.
pub fn load(path: Option<&Path>) -> Result<(Settings, Vec<String>)> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    let ignored = settings.merge_env();
    settings.validate()?;
    Ok((settings, ignored))
}

/// Locate a settings file, checking the environment variable first
pub fn find_settings_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_VAR) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("shopping-search/settings.yml"));
    }

    paths.into_iter().find(|p| p.exists())
}
