//! Packaging-type handler registry
//!
//! Maps packaging types (e.g. "jar", "pom", "war") to the file extension used
//! when locating the artifact in a repository. The registry is seeded with the
//! stock handlers; an unregistered packaging type falls back to using the
//! packaging type itself as the extension, so the lookup never fails.

use std::collections::HashMap;

/// Registry of packaging-type handlers
#[derive(Debug, Clone)]
pub struct HandlerRegistry {
    extensions: HashMap<String, String>,
}

impl HandlerRegistry {
    /// Create an empty registry with no handlers
    pub fn empty() -> Self {
        Self {
            extensions: HashMap::new(),
        }
    }

    /// Create a registry seeded with the stock handlers
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (packaging, extension) in stock_handlers() {
            registry.register(packaging, extension);
        }
        registry
    }

    /// Register an extension for a packaging type, replacing any existing entry
    pub fn register(&mut self, packaging: impl Into<String>, extension: impl Into<String>) {
        self.extensions.insert(packaging.into(), extension.into());
    }

    /// Resolve the file extension for a packaging type
    ///
    /// Unregistered packaging types use the packaging type itself as the
    /// extension, matching the stock handler behavior for custom types.
    pub fn extension_for<'a>(&'a self, packaging: &'a str) -> &'a str {
        self.extensions
            .get(packaging)
            .map(String::as_str)
            .unwrap_or(packaging)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The stock packaging-type to extension mappings
fn stock_handlers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("pom", "pom"),
        ("jar", "jar"),
        ("test-jar", "jar"),
        ("maven-plugin", "jar"),
        ("ejb", "jar"),
        ("ejb-client", "jar"),
        ("war", "war"),
        ("ear", "ear"),
        ("rar", "rar"),
        ("java-source", "jar"),
        ("javadoc", "jar"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_extensions() {
        let registry = HandlerRegistry::builtin();
        assert_eq!(registry.extension_for("jar"), "jar");
        assert_eq!(registry.extension_for("pom"), "pom");
        assert_eq!(registry.extension_for("war"), "war");
        assert_eq!(registry.extension_for("ejb"), "jar");
        assert_eq!(registry.extension_for("test-jar"), "jar");
        assert_eq!(registry.extension_for("maven-plugin"), "jar");
        assert_eq!(registry.extension_for("javadoc"), "jar");
    }

    #[test]
    fn test_unknown_packaging_falls_back_to_itself() {
        let registry = HandlerRegistry::builtin();
        assert_eq!(registry.extension_for("nar"), "nar");
        assert_eq!(registry.extension_for("zip"), "zip");
    }

    #[test]
    fn test_registered_handler_wins() {
        let mut registry = HandlerRegistry::builtin();
        registry.register("bundle", "jar");
        assert_eq!(registry.extension_for("bundle"), "jar");
    }

    #[test]
    fn test_empty_registry_always_falls_back() {
        let registry = HandlerRegistry::empty();
        assert_eq!(registry.extension_for("jar"), "jar");
        assert_eq!(registry.extension_for("ejb"), "ejb");
    }
}
