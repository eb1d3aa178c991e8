//! libSQL database configuration.

use serde::{Deserialize, Serialize};

/// Default database location, relative to the working directory.
fn default_path() -> String {
    ".quill/quill.db".to_string()
}

const fn default_foreign_keys() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the local database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Issue `PRAGMA foreign_keys = ON` on every connection.
    #[serde(default = "default_foreign_keys")]
    pub foreign_keys: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            foreign_keys: default_foreign_keys(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the database lives only in memory for the lifetime of the process.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_project_dir() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, ".quill/quill.db");
        assert!(config.foreign_keys);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn memory_detection() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
            ..Default::default()
        };
        assert!(config.is_in_memory());
    }
}
