//! Error types and handling for Artifetch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every failure in this crate propagates immediately to the caller. The core
//! performs no logging, no suppression, and no partial recovery: a repository
//! spec that fails to parse aborts the whole search-order build, and an engine
//! failure is surfaced to the caller unchanged.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Artifetch operations
#[derive(Error, Diagnostic, Debug)]
pub enum ResolveError {
    // Repository spec errors
    #[error("Invalid syntax for repository '{spec}': use \"id::layout::url\" or \"URL\"")]
    #[diagnostic(
        code(artifetch::repo::parse_failed),
        help(
            "A repository is either a bare URL or id::layout::url with a non-empty id and url. \
             The layout segment may be left empty to use the default layout."
        )
    )]
    RepositoryParseFailed { spec: String },

    #[error("Invalid repository layout: {name}")]
    #[diagnostic(
        code(artifetch::layout::unknown),
        help("Known layouts are registered in the layout registry; \"default\" is built in")
    )]
    UnknownLayout { name: String },

    // Coordinate errors
    #[error("Invalid coordinate '{input}': {reason}")]
    #[diagnostic(
        code(artifetch::coordinate::invalid),
        help("Coordinates use the form groupId:artifactId:version[:packaging[:classifier]]")
    )]
    InvalidCoordinate { input: String, reason: String },

    // Resolution errors
    #[error("Failed to resolve artifact {coordinate}: {reason}")]
    #[diagnostic(code(artifetch::resolve::failed))]
    ResolutionFailed { coordinate: String, reason: String },

    // Settings errors
    #[error("Settings file not found: {path}")]
    #[diagnostic(code(artifetch::settings::not_found))]
    SettingsNotFound { path: String },

    #[error("Failed to parse settings file: {path}")]
    #[diagnostic(code(artifetch::settings::parse_failed))]
    SettingsParseFailed { path: String, reason: String },

    #[error("Failed to read settings file: {path}")]
    #[diagnostic(code(artifetch::settings::read_failed))]
    SettingsReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(artifetch::io::error))]
    Io { message: String },
}

impl From<std::io::Error> for ResolveError {
    fn from(err: std::io::Error) -> Self {
        ResolveError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ResolveError {
    fn from(err: serde_yaml::Error) -> Self {
        ResolveError::SettingsParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(err: serde_json::Error) -> Self {
        ResolveError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ResolveError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    test_error_contains!(
        test_repository_parse_failed_names_input_and_forms,
        ResolveError::RepositoryParseFailed {
            spec: "a::b".to_string(),
        },
        "a::b",
        "id::layout::url",
        "URL",
    );

    test_error_contains!(
        test_unknown_layout_names_layout,
        ResolveError::UnknownLayout {
            name: "legacy".to_string(),
        },
        "Invalid repository layout",
        "legacy",
    );

    test_error_contains!(
        test_resolution_failed_names_coordinate,
        ResolveError::ResolutionFailed {
            coordinate: "org.example:thing:jar:1.0".to_string(),
            reason: "not found in any repository".to_string(),
        },
        "org.example:thing:jar:1.0",
        "not found",
    );

    #[test]
    fn test_error_code() {
        let err = ResolveError::RepositoryParseFailed {
            spec: "x".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("artifetch::repo::parse_failed".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ResolveError = io_err.into();
        assert!(matches!(err, ResolveError::Io { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "repositories: [unclosed";
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str(yaml_str);
        let yaml_err = parse_result.unwrap_err();
        let err: ResolveError = yaml_err.into();
        assert!(matches!(err, ResolveError::SettingsParseFailed { .. }));
    }

    #[test]
    fn test_invalid_coordinate_display() {
        let err = ResolveError::InvalidCoordinate {
            input: "org.example".to_string(),
            reason: "expected at least groupId:artifactId:version".to_string(),
        };
        assert!(err.to_string().contains("org.example"));
        assert!(err.to_string().contains("expected at least"));
    }
}
