//! Artifetch - artifact resolver front-end
//!
//! Resolves a single artifact (group, name, version, classifier, packaging)
//! against a configurable, ordered list of Maven-style remote repositories.
//! The crate owns the repository-specification syntax (`URL` or
//! `id::layout::url`), the assembly of the repository search order, and the
//! adaptation of coordinates into the shape the resolution engine expects.
//! Fetching, caching, and checksum verification belong to the engine, which
//! embedders supply behind the [`ResolutionEngine`] trait.
//!
//! ```
//! use artifetch::{LayoutRegistry, build_search_order};
//!
//! let layouts = LayoutRegistry::builtin();
//! let order = build_search_order(
//!     &[],
//!     Some("central::default::https://repo.maven.apache.org/maven2"),
//!     &layouts,
//! )?;
//! assert_eq!(order[0].id(), "central");
//! # Ok::<(), artifetch::ResolveError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod coordinate;
pub mod engine;
pub mod error;
pub mod handler;
pub mod layout;
pub mod repository;
pub mod resolver;
pub mod settings;

pub use coordinate::{Coordinate, DEFAULT_PACKAGING, ResolverCoordinate};
pub use engine::{ResolutionEngine, ResolutionRequest, ResolvedArtifact, default_local_store};
pub use error::{ResolveError, Result};
pub use handler::HandlerRegistry;
pub use layout::{DEFAULT_LAYOUT, DefaultLayout, LayoutRegistry, RepositoryLayout};
pub use repository::{
    ChecksumPolicy, Repository, RepositoryPolicy, TEMP_REPOSITORY_ID, UpdatePolicy,
    build_search_order, parse_repository,
};
pub use resolver::{ArtifactResolver, ProjectContext};
pub use settings::{RepositoryEntry, SETTINGS_FILE, Settings};
