//! Application context shared by command handlers.

use std::path::{Path, PathBuf};

use log::debug;

use studylog_core::storage::JsonFileStore;
use studylog_core::{SessionLedger, TodoLedger};

use crate::config;

/// Resolved runtime context: where data lives and how chatty output is.
pub struct AppContext {
    data_dir: PathBuf,
    quiet: bool,
}

impl AppContext {
    /// Resolve the data directory: the `--data-dir` flag (or its env var)
    /// wins, then the config file's `[data] dir`, then the XDG default.
    pub fn resolve(data_dir_flag: Option<String>, quiet: bool) -> anyhow::Result<Self> {
        let data_dir = if let Some(dir) = data_dir_flag {
            PathBuf::from(dir)
        } else if let Some(dir) = configured_data_dir()? {
            dir
        } else {
            config::default_data_dir()?
        };

        Ok(Self { data_dir, quiet })
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn session_ledger(&self) -> anyhow::Result<SessionLedger<JsonFileStore>> {
        Ok(SessionLedger::new(self.open_store()?))
    }

    pub fn todo_ledger(&self) -> anyhow::Result<TodoLedger<JsonFileStore>> {
        Ok(TodoLedger::new(self.open_store()?))
    }

    fn open_store(&self) -> anyhow::Result<JsonFileStore> {
        debug!("opening blob store at {}", self.data_dir.display());
        JsonFileStore::new(&self.data_dir)
            .map_err(|e| anyhow::anyhow!("Failed to open data directory: {}", e))
    }
}

fn configured_data_dir() -> anyhow::Result<Option<PathBuf>> {
    let config_path = config::default_config_path()?;
    if !config_path.exists() {
        return Ok(None);
    }
    let config = config::read_config(&config_path)?;
    Ok(config.data.dir.map(PathBuf::from))
}
