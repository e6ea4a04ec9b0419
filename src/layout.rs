//! Repository layouts and the layout registry
//!
//! A layout is the naming convention a repository uses to derive the path of
//! an artifact file from its coordinate. Layouts are looked up by name while
//! parsing repository specs; the registry is seeded with the standard
//! `"default"` layout and embedders may register their own.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::coordinate::ResolverCoordinate;
use crate::error::{ResolveError, Result};

/// Name of the built-in layout
pub const DEFAULT_LAYOUT: &str = "default";

/// Path convention a repository uses to locate artifact files
pub trait RepositoryLayout: Send + Sync {
    /// The name this layout is registered under
    fn name(&self) -> &str;

    /// Relative path of the artifact file within the repository
    fn artifact_path(&self, coordinate: &ResolverCoordinate) -> String;
}

impl fmt::Debug for dyn RepositoryLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RepositoryLayout({})", self.name())
    }
}

/// The standard repository layout
///
/// Paths follow `group/as/dirs/artifact/version/artifact-version[-classifier].ext`,
/// with dots in the group identifier mapped to directory separators.
#[derive(Debug, Clone, Default)]
pub struct DefaultLayout;

impl RepositoryLayout for DefaultLayout {
    fn name(&self) -> &str {
        DEFAULT_LAYOUT
    }

    fn artifact_path(&self, coordinate: &ResolverCoordinate) -> String {
        let mut path = String::new();
        path.push_str(&coordinate.group_id.replace('.', "/"));
        path.push('/');
        path.push_str(&coordinate.artifact_id);
        path.push('/');
        path.push_str(&coordinate.version);
        path.push('/');
        path.push_str(&coordinate.artifact_id);
        path.push('-');
        path.push_str(&coordinate.version);
        if let Some(ref classifier) = coordinate.classifier {
            path.push('-');
            path.push_str(classifier);
        }
        path.push('.');
        path.push_str(&coordinate.extension);
        path
    }
}

/// Registry of known repository layouts, keyed by name
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: HashMap<String, Arc<dyn RepositoryLayout>>,
}

impl LayoutRegistry {
    /// Create an empty registry with no layouts
    pub fn empty() -> Self {
        Self {
            layouts: HashMap::new(),
        }
    }

    /// Create a registry containing the built-in `"default"` layout
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(DefaultLayout));
        registry
    }

    /// Register a layout under its own name, replacing any existing entry
    pub fn register(&mut self, layout: Arc<dyn RepositoryLayout>) {
        self.layouts.insert(layout.name().to_string(), layout);
    }

    /// Look up a layout by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn RepositoryLayout>> {
        self.layouts.get(name).cloned()
    }

    /// Look up a layout by name, failing with `UnknownLayout` when absent
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn RepositoryLayout>> {
        self.get(name).ok_or_else(|| ResolveError::UnknownLayout {
            name: name.to_string(),
        })
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
