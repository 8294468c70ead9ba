//! Configuration Module
//!
//! Handles loading store configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "cache";

/// Store configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Namespace the store reads and writes
    pub namespace: String,
    /// JSON document path; `None` keeps the document in memory only
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Creates a new StoreConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DOCSTORE_NAMESPACE` - Namespace name (default: "cache")
    /// - `DOCSTORE_PATH` - Path of the backing JSON document (default: unset, in-memory)
    pub fn from_env() -> Self {
        Self {
            namespace: env::var("DOCSTORE_NAMESPACE")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            path: env::var("DOCSTORE_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Returns a copy of this config pointed at another namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Returns a copy of this config backed by the JSON document at `path`.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.namespace, "cache");
        assert!(config.path.is_none());
    }

    #[test]
    fn test_config_from_env() {
        // Both variables are exercised in one test to avoid racing other env tests
        env::remove_var("DOCSTORE_NAMESPACE");
        env::remove_var("DOCSTORE_PATH");

        let config = StoreConfig::from_env();
        assert_eq!(config, StoreConfig::default());

        env::set_var("DOCSTORE_NAMESPACE", "sessions");
        env::set_var("DOCSTORE_PATH", "/tmp/docstore.json");
        let config = StoreConfig::from_env();
        assert_eq!(config.namespace, "sessions");
        assert_eq!(config.path, Some(PathBuf::from("/tmp/docstore.json")));

        env::remove_var("DOCSTORE_NAMESPACE");
        env::remove_var("DOCSTORE_PATH");
    }

    #[test]
    fn test_config_builders() {
        let config = StoreConfig::default()
            .with_namespace("users")
            .with_path("data/db.json");
        assert_eq!(config.namespace, "users");
        assert_eq!(config.path, Some(PathBuf::from("data/db.json")));
    }
}
