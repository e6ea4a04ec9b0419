//! Artifact coordinates
//!
//! A coordinate identifies a single artifact by group, name, version, optional
//! classifier, and packaging type. Coordinates are parsed from the command-line
//! form `groupId:artifactId:version[:packaging[:classifier]]` and adapted into
//! the resolver-facing shape (packaging replaced by its file extension) before
//! being handed to the resolution engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, Result};

/// Default packaging type when a coordinate does not specify one
pub const DEFAULT_PACKAGING: &str = "jar";

/// An artifact coordinate as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Group identifier (e.g., "org.apache.maven")
    pub group_id: String,
    /// Artifact identifier (e.g., "maven-core")
    pub artifact_id: String,
    /// Version string, taken verbatim
    pub version: String,
    /// Optional classifier (e.g., "sources", "javadoc")
    pub classifier: Option<String>,
    /// Packaging type (e.g., "jar", "pom", "war"); drives the extension lookup
    pub packaging: String,
}

impl Coordinate {
    /// Create a coordinate with the default packaging and no classifier
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: None,
            packaging: DEFAULT_PACKAGING.to_string(),
        }
    }

    /// Set the classifier
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Set the packaging type
    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = packaging.into();
        self
    }
}

impl FromStr for Coordinate {
    type Err = ResolveError;

    /// Parse a coordinate from its command-line form
    ///
    /// Supported forms:
    /// - `groupId:artifactId:version`
    /// - `groupId:artifactId:version:packaging`
    /// - `groupId:artifactId:version:packaging:classifier`
    fn from_str(input: &str) -> Result<Self> {
        let segments: Vec<&str> = input.split(':').collect();

        if segments.len() < 3 {
            return Err(ResolveError::InvalidCoordinate {
                input: input.to_string(),
                reason: "expected at least groupId:artifactId:version".to_string(),
            });
        }
        if segments.len() > 5 {
            return Err(ResolveError::InvalidCoordinate {
                input: input.to_string(),
                reason: "too many ':' separated segments".to_string(),
            });
        }
        if segments[..3].iter().any(|s| s.is_empty()) {
            return Err(ResolveError::InvalidCoordinate {
                input: input.to_string(),
                reason: "groupId, artifactId and version must be non-empty".to_string(),
            });
        }

        let mut coordinate = Coordinate::new(segments[0], segments[1], segments[2]);
        if let Some(packaging) = segments.get(3) {
            if packaging.is_empty() {
                return Err(ResolveError::InvalidCoordinate {
                    input: input.to_string(),
                    reason: "packaging segment must be non-empty when present".to_string(),
                });
            }
            coordinate = coordinate.with_packaging(*packaging);
        }
        if let Some(classifier) = segments.get(4) {
            if classifier.is_empty() {
                return Err(ResolveError::InvalidCoordinate {
                    input: input.to_string(),
                    reason: "classifier segment must be non-empty when present".to_string(),
                });
            }
            coordinate = coordinate.with_classifier(*classifier);
        }

        Ok(coordinate)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.version, self.packaging
        )?;
        if let Some(ref classifier) = self.classifier {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

/// The coordinate shape the resolution engine consumes
///
/// The packaging type has been replaced by its file extension via the handler
/// registry; the engine never sees the packaging type itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: Option<String>,
    /// File extension resolved from the packaging type
    pub extension: String,
}

impl ResolverCoordinate {
    /// Adapt a caller-facing coordinate using a handler registry
    ///
    /// Replaces the packaging type with its file extension; everything else is
    /// carried over as-is. Pure transformation.
    pub fn from_coordinate(
        coordinate: &Coordinate,
        handlers: &crate::handler::HandlerRegistry,
    ) -> Self {
        Self {
            group_id: coordinate.group_id.clone(),
            artifact_id: coordinate.artifact_id.clone(),
            version: coordinate.version.clone(),
            classifier: coordinate.classifier.clone(),
            extension: handlers.extension_for(&coordinate.packaging).to_string(),
        }
    }
}

impl fmt::Display for ResolverCoordinate {
    /// Formats as `groupId:artifactId:extension[:classifier]:version`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.extension)?;
        if let Some(ref classifier) = self.classifier {
            write!(f, ":{}", classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let coordinate: Coordinate = "org.example:thing:1.2".parse().unwrap();
        assert_eq!(coordinate.group_id, "org.example");
        assert_eq!(coordinate.artifact_id, "thing");
        assert_eq!(coordinate.version, "1.2");
        assert_eq!(coordinate.packaging, "jar");
        assert_eq!(coordinate.classifier, None);
    }

    #[test]
    fn test_parse_with_packaging() {
        let coordinate: Coordinate = "org.example:thing:1.2:war".parse().unwrap();
        assert_eq!(coordinate.packaging, "war");
        assert_eq!(coordinate.classifier, None);
    }

    #[test]
    fn test_parse_with_packaging_and_classifier() {
        let coordinate: Coordinate = "org.example:thing:1.2:jar:sources".parse().unwrap();
        assert_eq!(coordinate.packaging, "jar");
        assert_eq!(coordinate.classifier.as_deref(), Some("sources"));
    }

    #[test]
    fn test_parse_too_few_segments() {
        let result: std::result::Result<Coordinate, _> = "org.example:thing".parse();
        assert!(matches!(
            result.unwrap_err(),
            ResolveError::InvalidCoordinate { .. }
        ));
    }

    #[test]
    fn test_parse_too_many_segments() {
        let result: std::result::Result<Coordinate, _> = "a:b:c:d:e:f".parse();
        assert!(matches!(
            result.unwrap_err(),
            ResolveError::InvalidCoordinate { .. }
        ));
    }

    #[test]
    fn test_parse_empty_required_segment() {
        let result: std::result::Result<Coordinate, _> = "a::1.0".parse();
        assert!(result.is_err());
        let result: std::result::Result<Coordinate, _> = ":b:1.0".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_empty_optional_segment() {
        let result: std::result::Result<Coordinate, _> = "a:b:1.0:".parse();
        assert!(result.is_err());
        let result: std::result::Result<Coordinate, _> = "a:b:1.0:jar:".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let coordinate = Coordinate::new("org.example", "thing", "1.2")
            .with_packaging("war")
            .with_classifier("sources");
        assert_eq!(coordinate.to_string(), "org.example:thing:1.2:war:sources");
        let reparsed: Coordinate = coordinate.to_string().parse().unwrap();
        assert_eq!(reparsed, coordinate);
    }

    #[test]
    fn test_resolver_coordinate_display() {
        let coordinate = ResolverCoordinate {
            group_id: "org.example".to_string(),
            artifact_id: "thing".to_string(),
            version: "1.2".to_string(),
            classifier: Some("sources".to_string()),
            extension: "jar".to_string(),
        };
        assert_eq!(coordinate.to_string(), "org.example:thing:jar:sources:1.2");
    }
}
