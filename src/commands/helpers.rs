//! Shared helpers for command implementations

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::error::Result;
use crate::repository::Repository;
use crate::settings::Settings;

/// Load settings from an explicit path, or from the working directory
///
/// An explicit `--settings` path must exist; the implicit working-directory
/// file is optional and falls back to defaults.
pub fn load_settings(settings_path: Option<&PathBuf>) -> Result<Settings> {
    match settings_path {
        Some(path) => Settings::from_file(path),
        None => Settings::load(Path::new(".")),
    }
}

/// JSON shape of a repository, shared by the repos and plan commands
pub fn repository_json(repository: &Repository) -> serde_json::Value {
    json!({
        "id": repository.id(),
        "layout": repository.layout().name(),
        "url": repository.url(),
    })
}
