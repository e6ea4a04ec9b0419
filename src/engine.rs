//! The external resolution engine boundary
//!
//! All network fetching, local-store checks, checksum verification, and
//! artifact storage happen behind [`ResolutionEngine`]. This crate only builds
//! the request (search order plus the project's request template) and the
//! resolver-facing coordinate, then hands both to the engine and surfaces its
//! outcome unchanged.

use std::path::PathBuf;

use crate::coordinate::ResolverCoordinate;
use crate::error::Result;
use crate::repository::Repository;

/// A resolution request: the request template with the search scope applied
///
/// The template (local store location, offline flag) comes from the project
/// context; the repository list is set per resolution call from the built
/// search order.
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    /// Ordered repositories to search, first match wins
    pub repositories: Vec<Repository>,
    /// Local artifact store the engine checks before going remote
    pub local_store: PathBuf,
    /// When set, the engine must not touch the network
    pub offline: bool,
}

impl ResolutionRequest {
    /// Create a request template with no repositories and default settings
    pub fn new() -> Self {
        Self {
            repositories: Vec::new(),
            local_store: default_local_store(),
            offline: false,
        }
    }

    /// Set the local artifact store location
    pub fn with_local_store(mut self, local_store: impl Into<PathBuf>) -> Self {
        self.local_store = local_store.into();
        self
    }

    /// Set the offline flag
    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }
}

impl Default for ResolutionRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Default local artifact store, `~/.m2/repository` when a home directory
/// exists and a relative fallback otherwise
pub fn default_local_store() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".m2").join("repository"))
        .unwrap_or_else(|| PathBuf::from(".m2/repository"))
}

/// An artifact the engine located and materialized on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// The coordinate that was resolved
    pub coordinate: ResolverCoordinate,
    /// Path of the artifact file in the local store
    pub file: PathBuf,
    /// Id of the repository the artifact came from, when the engine knows it
    pub repository_id: Option<String>,
}

/// The external dependency-resolution engine
///
/// Implementations own fetching, caching, and verification. Failures are
/// reported as [`crate::ResolveError::ResolutionFailed`] and pass through the
/// resolver untouched: no retry, no fallback repository substitution.
pub trait ResolutionEngine {
    /// Resolve a coordinate against the request's repository search scope
    fn resolve(
        &self,
        request: &ResolutionRequest,
        coordinate: &ResolverCoordinate,
    ) -> Result<ResolvedArtifact>;
}
