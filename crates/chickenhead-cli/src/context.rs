use anyhow::Result;
use chickenhead_core::{ChickenheadError, Config, ConfigManager, Launcher, SnippetStore};
use tracing::debug;

use crate::services::SystemLauncher;

/// Application context that gets passed to command handlers
///
/// Built once in main() and handed down explicitly. Nothing in here changes
/// after construction.
pub struct Context {
    pub store: SnippetStore,
    config: Config,
    launcher: Box<dyn Launcher>,
}

impl Context {
    /// Load configuration for the current user and prepare the snippet root
    pub fn new() -> Result<Self> {
        let home = ConfigManager::home_dir().map_err(ChickenheadError::from)?;
        let config = ConfigManager::load_with_env(&home)
            .map_err(ChickenheadError::from)?;
        debug!(?config, "configuration loaded");

        let store = SnippetStore::new(config.snippet_root(&home));
        store.ensure_root()?;
        debug!(root = %store.root().display(), "snippet root ready");

        Ok(Self::with_parts(config, store, Box::new(SystemLauncher)))
    }

    /// Assemble a context from already-built parts
    pub fn with_parts(config: Config, store: SnippetStore, launcher: Box<dyn Launcher>) -> Self {
        Self {
            store,
            config,
            launcher,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn launcher(&self) -> &dyn Launcher {
        self.launcher.as_ref()
    }
}
