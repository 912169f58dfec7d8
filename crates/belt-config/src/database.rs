//! Database location configuration.

use serde::{Deserialize, Serialize};

/// Default on-disk location, relative to the working directory.
fn default_path() -> String {
    ".taskbelt/taskbelt.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. `:memory:` gives an ephemeral store.
    #[serde(default = "default_path")]
    pub path: String,
}

impl DatabaseConfig {
    /// Whether the configured store lives only for the process lifetime.
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
