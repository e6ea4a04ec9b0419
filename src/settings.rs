//! Settings file handling
//!
//! The binary reads an optional YAML settings file declaring the repositories
//! inherited by every command, plus the request-template fields. This is the
//! command line's stand-in for the enclosing build tool's project
//! configuration; library embedders construct a [`ProjectContext`] directly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::ResolutionRequest;
use crate::error::{ResolveError, Result};
use crate::layout::{DEFAULT_LAYOUT, LayoutRegistry};
use crate::repository::{Repository, RepositoryPolicy};
use crate::resolver::ProjectContext;

/// Settings filename looked up in the working directory
pub const SETTINGS_FILE: &str = ".artifetch.yaml";

/// A repository declared in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    /// Repository id
    pub id: String,
    /// Layout name; omitted means the default layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Repository URL
    pub url: String,
}

/// Parsed settings file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Inherited repositories, searched before any extras from the command line
    #[serde(default)]
    pub repositories: Vec<RepositoryEntry>,

    /// Local artifact store override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_store: Option<std::path::PathBuf>,

    /// Forbid the engine from touching the network
    #[serde(default)]
    pub offline: bool,
}

impl Settings {
    /// Load settings from a directory, falling back to defaults when the
    /// settings file does not exist
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load settings from an explicit file path; the file must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResolveError::SettingsNotFound {
                path: path.display().to_string(),
            });
        }

        let content =
            fs::read_to_string(path).map_err(|e| ResolveError::SettingsReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_yaml(&content).map_err(|e| match e {
            ResolveError::SettingsParseFailed { reason, .. } => {
                ResolveError::SettingsParseFailed {
                    path: path.display().to_string(),
                    reason,
                }
            }
            other => other,
        })
    }

    /// Parse settings from YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Build the project context these settings describe
    ///
    /// Declared repositories are resolved against the layout registry with the
    /// fixed always-on policy; an unknown layout name fails the whole build.
    pub fn project_context(&self, layouts: &LayoutRegistry) -> Result<ProjectContext> {
        let policy = RepositoryPolicy::always();
        let mut repositories = Vec::with_capacity(self.repositories.len());
        for entry in &self.repositories {
            let layout_name = entry.layout.as_deref().unwrap_or(DEFAULT_LAYOUT);
            let layout = layouts.resolve(layout_name)?;
            repositories.push(Repository::new(&entry.id, &entry.url, layout, policy));
        }

        let mut template = ResolutionRequest::new();
        if let Some(ref local_store) = self.local_store {
            template = template.with_local_store(local_store);
        }
        template = template.with_offline(self.offline);

        Ok(ProjectContext::new()
            .with_repositories(repositories)
            .with_request_template(template))
    }
}
