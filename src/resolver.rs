//! The artifact resolver utility
//!
//! Ties the pieces together: the project context supplies inherited
//! repositories and the request template, the handler registry maps packaging
//! types to extensions, and the engine does the actual resolution work. The
//! search order is built once (see [`crate::repository::build_search_order`])
//! and the resolver is constructed with it, so "build before resolve" holds by
//! construction and the list is never mutated afterwards.

use crate::coordinate::{Coordinate, ResolverCoordinate};
use crate::engine::{ResolutionEngine, ResolutionRequest, ResolvedArtifact};
use crate::error::Result;
use crate::handler::HandlerRegistry;
use crate::repository::Repository;

/// Project-inherited configuration a resolver is created against
///
/// Stands in for the host build tool's project: the repositories declared by
/// the enclosing project and the request template every resolution call starts
/// from. The binary populates this from the settings file; embedders construct
/// it directly.
#[derive(Debug, Clone, Default)]
pub struct ProjectContext {
    repositories: Vec<Repository>,
    request_template: ResolutionRequest,
}

impl ProjectContext {
    /// Create a context with no inherited repositories and a default template
    pub fn new() -> Self {
        Self {
            repositories: Vec::new(),
            request_template: ResolutionRequest::new(),
        }
    }

    /// Set the inherited repository list
    pub fn with_repositories(mut self, repositories: Vec<Repository>) -> Self {
        self.repositories = repositories;
        self
    }

    /// Set the request template
    pub fn with_request_template(mut self, request_template: ResolutionRequest) -> Self {
        self.request_template = request_template;
        self
    }

    /// Repositories inherited from the enclosing project, in declaration order
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// The request template resolution calls clone and augment
    pub fn request_template(&self) -> &ResolutionRequest {
        &self.request_template
    }
}

/// Resolves artifact coordinates against a fixed repository search order
pub struct ArtifactResolver {
    engine: Box<dyn ResolutionEngine>,
    handlers: HandlerRegistry,
    context: ProjectContext,
    search_order: Vec<Repository>,
}

impl ArtifactResolver {
    /// Create a resolver over an already-built search order
    pub fn new(
        engine: Box<dyn ResolutionEngine>,
        handlers: HandlerRegistry,
        context: ProjectContext,
        search_order: Vec<Repository>,
    ) -> Self {
        Self {
            engine,
            handlers,
            context,
            search_order,
        }
    }

    /// The repository search order this resolver was built with
    pub fn search_order(&self) -> &[Repository] {
        &self.search_order
    }

    /// Resolve a coordinate to an artifact
    ///
    /// Clones the context's request template, sets the search order on it, and
    /// delegates to the engine with the adapted coordinate. Engine failures
    /// are surfaced unchanged.
    pub fn resolve(&self, coordinate: &Coordinate) -> Result<ResolvedArtifact> {
        let mut request = self.context.request_template().clone();
        request.repositories = self.search_order.clone();

        let resolver_coordinate = self.to_resolver_coordinate(coordinate);
        self.engine.resolve(&request, &resolver_coordinate)
    }

    /// Adapt a coordinate into the shape the engine consumes
    ///
    /// Replaces the packaging type with its file extension from the handler
    /// registry. Pure transformation, no side effects.
    pub fn to_resolver_coordinate(&self, coordinate: &Coordinate) -> ResolverCoordinate {
        ResolverCoordinate::from_coordinate(coordinate, &self.handlers)
    }
}
