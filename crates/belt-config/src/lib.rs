//! # belt-config
//!
//! Layered configuration loading for Taskbelt using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKBELT_*` prefix, `__` as separator)
//! 2. Project-level `.taskbelt/config.toml`
//! 3. User-level `~/.config/taskbelt/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKBELT_DATABASE__PATH` -> `database.path`,
//! `TASKBELT_GENERAL__DEFAULT_PRIORITY` -> `general.default_priority`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use belt_config::BeltConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = BeltConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = BeltConfig::load().expect("config");
//!
//! println!("database at {}", config.database.path);
//! ```

mod database;
mod error;
mod general;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use belt_core::Task;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BeltConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl BeltConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`TASKBELT_*` prefix)
    /// 2. `.taskbelt/config.toml` (project-local)
    /// 3. `~/.config/taskbelt/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when extraction fails and
    /// [`ConfigError::InvalidValue`] when a loaded value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".taskbelt/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("TASKBELT_").split("__"));

        figment
    }

    /// Check loaded values against their allowed ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `general.default_priority`
    /// falls outside the task priority range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let priority = self.general.default_priority;
        if !(Task::PRIORITY_MIN..=Task::PRIORITY_MAX).contains(&priority) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_priority".into(),
                reason: format!(
                    "must be between {} and {}, got {priority}",
                    Task::PRIORITY_MIN,
                    Task::PRIORITY_MAX
                ),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskbelt").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        // In tests/build: CARGO_MANIFEST_DIR points to the crate dir.
        // Walk up to find workspace root's .env.
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = BeltConfig::default();
        assert_eq!(config.database.path, ".taskbelt/taskbelt.db");
        assert_eq!(config.general.default_priority, 3);
        assert_eq!(config.general.default_limit, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = BeltConfig::figment();
        let config: BeltConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.general.default_limit, 20);
        assert!(!config.database.path.is_empty());
    }

    #[test]
    fn out_of_range_priority_fails_validation() {
        let mut config = BeltConfig::default();
        config.general.default_priority = 9;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
