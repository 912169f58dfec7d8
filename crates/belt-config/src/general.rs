//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default priority for new tasks when the caller passes none.
const fn default_priority() -> i64 {
    3
}

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Priority assigned to tasks submitted without an explicit one (1-5).
    #[serde(default = "default_priority")]
    pub default_priority: i64,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_priority: default_priority(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_priority, 3);
        assert_eq!(config.default_limit, 20);
    }
}
