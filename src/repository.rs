//! Remote repositories, repository specs, and the search order
//!
//! This module handles parsing repository specification strings and building
//! the ordered repository list a resolution attempt searches:
//! - Bare URLs: `https://repo.example.com/maven2`
//! - Extended form: `id::layout::url` (layout segment may be empty)
//! - Comma-separated lists of either form, appended after the repositories
//!   inherited from the project context
//!
//! The extended form is matched against the anchored pattern
//! `(.+)::(.*)::(.+)`; its greedy first capture means an input with more than
//! two `::` occurrences still parses, with everything up to the second-to-last
//! `::` taken as the id. That behavior is inherited and kept as-is.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ResolveError, Result};
use crate::layout::{DEFAULT_LAYOUT, LayoutRegistry, RepositoryLayout};

/// Repository id used for bare-URL specs
pub const TEMP_REPOSITORY_ID: &str = "temp";

/// Pattern for the extended `id::layout::url` repository form
#[allow(clippy::unwrap_used)]
static ALT_REPO_SYNTAX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+)::(.*)::(.+)$").unwrap());

/// When a repository is checked for newer artifact versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    Always,
    Daily,
    Never,
}

/// How checksum mismatches on fetched files are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumPolicy {
    Fail,
    Warn,
    Ignore,
}

/// Update and checksum behavior for a repository
///
/// Every repository parsed from a spec string gets the same fixed policy:
/// enabled, updates always, checksum mismatches downgraded to warnings. The
/// policy is applied identically to releases and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryPolicy {
    pub enabled: bool,
    pub updates: UpdatePolicy,
    pub checksums: ChecksumPolicy,
}

impl RepositoryPolicy {
    /// The fixed policy used for every parsed repository
    pub fn always() -> Self {
        Self {
            enabled: true,
            updates: UpdatePolicy::Always,
            checksums: ChecksumPolicy::Warn,
        }
    }
}

/// A named, addressable artifact source with a layout and policies
///
/// Immutable once constructed; the built search order is shared read-only
/// with every resolution call.
#[derive(Clone)]
pub struct Repository {
    id: String,
    url: String,
    layout: Arc<dyn RepositoryLayout>,
    releases: RepositoryPolicy,
    snapshots: RepositoryPolicy,
}

impl Repository {
    /// Create a repository applying the same policy to releases and snapshots
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        layout: Arc<dyn RepositoryLayout>,
        policy: RepositoryPolicy,
    ) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            layout,
            releases: policy,
            snapshots: policy,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn layout(&self) -> &Arc<dyn RepositoryLayout> {
        &self.layout
    }

    pub fn releases(&self) -> &RepositoryPolicy {
        &self.releases
    }

    pub fn snapshots(&self) -> &RepositoryPolicy {
        &self.snapshots
    }

    /// Full URL of an artifact file in this repository, per its layout
    pub fn artifact_url(&self, coordinate: &crate::coordinate::ResolverCoordinate) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            self.layout.artifact_path(coordinate)
        )
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("layout", &self.layout.name())
            .field("releases", &self.releases)
            .field("snapshots", &self.snapshots)
            .finish()
    }
}

impl PartialEq for Repository {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.url == other.url
            && self.layout.name() == other.layout.name()
            && self.releases == other.releases
            && self.snapshots == other.snapshots
    }
}

/// Parse a single repository specification string
///
/// A spec without `::` is a bare URL: the repository gets the id `"temp"`,
/// the `"default"` layout, and the input (verbatim, untrimmed) as URL. A spec
/// containing `::` must match `id::layout::url`; id and url are trimmed, and
/// an empty (after trimming) layout segment keeps the default layout.
///
/// Fails with `RepositoryParseFailed` for `::`-containing specs that do not
/// match the pattern, and `UnknownLayout` when the named layout (or the
/// default layout itself) is not registered.
pub fn parse_repository(
    spec: &str,
    policy: RepositoryPolicy,
    layouts: &LayoutRegistry,
) -> Result<Repository> {
    // bare URL unless the extended form is used
    let mut id = TEMP_REPOSITORY_ID;
    let mut layout = layouts.resolve(DEFAULT_LAYOUT)?;
    let mut url = spec;

    if spec.contains("::") {
        let captures =
            ALT_REPO_SYNTAX
                .captures(spec)
                .ok_or_else(|| ResolveError::RepositoryParseFailed {
                    spec: spec.to_string(),
                })?;

        // all three groups participate in any match
        id = captures.get(1).map_or(id, |m| m.as_str()).trim();
        let layout_name = captures.get(2).map_or("", |m| m.as_str()).trim();
        if !layout_name.is_empty() {
            layout = layouts.resolve(layout_name)?;
        }
        url = captures.get(3).map_or(url, |m| m.as_str()).trim();
    }

    Ok(Repository::new(id, url, layout, policy))
}

/// Build the ordered repository list a resolution attempt searches
///
/// Inherited repositories come first, in order. The optional extra spec is
/// split on commas into trimmed tokens (empties are kept, parse as bare URLs
/// with an empty URL, and are left for the engine to reject), each parsed with
/// the fixed always-on policy and appended in order. No de-duplication, no
/// sorting; the first parse failure aborts the whole build.
pub fn build_search_order(
    inherited: &[Repository],
    extra: Option<&str>,
    layouts: &LayoutRegistry,
) -> Result<Vec<Repository>> {
    let mut repositories = Vec::new();
    repositories.extend_from_slice(inherited);

    if let Some(extra) = extra {
        let policy = RepositoryPolicy::always();
        for token in extra.split(',') {
            repositories.push(parse_repository(token.trim(), policy, layouts)?);
        }
    }

    Ok(repositories)
}
