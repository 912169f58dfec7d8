use anyhow::Context as _;
use belt_config::BeltConfig;
use belt_db::BeltDb;

use crate::cli::GlobalFlags;

/// Shared state handed to every command handler.
pub struct AppContext {
    pub config: BeltConfig,
    pub db: BeltDb,
}

impl AppContext {
    /// Load configuration and open the database.
    ///
    /// The `--db` flag overrides the configured path. A relative path is
    /// resolved against the current working directory, and missing parent
    /// directories are created so a fresh checkout works without setup.
    pub async fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = BeltConfig::load_with_dotenv().context("failed to load configuration")?;

        let path = flags
            .db
            .clone()
            .unwrap_or_else(|| config.database.path.clone());

        if path != ":memory:" {
            if let Some(parent) = std::path::Path::new(&path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create database directory {}", parent.display())
                    })?;
                }
            }
        }

        let db = BeltDb::open_local(&path)
            .await
            .with_context(|| format!("failed to open database at {path}"))?;
        tracing::debug!(%path, "application context ready");

        Ok(Self { config, db })
    }
}
