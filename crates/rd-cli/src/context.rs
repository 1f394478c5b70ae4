use anyhow::{Context as AnyhowContext, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::path::{Path, PathBuf};
use tracing::debug;

use rd_core::config::{ConfigManager, RdConfig};
use rd_core::Reminder;
use rd_core::store::Store;

/// Application context that gets passed to command handlers
///
/// Owns the one store handle for this invocation together with the
/// resolved configuration. Built once in `main`; nothing is global.
pub struct Context {
    pub store: Store,
    config: RdConfig,
    default_time: NaiveTime,
}

impl Context {
    /// Load configuration and open the store
    ///
    /// Store path precedence: --store > config file > built-in default.
    pub fn new(store_path: Option<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let config = ConfigManager::load_config(config_path)?;
        let default_time = config.default_time()?;

        let store_path = store_path.unwrap_or_else(|| config.store_path());
        debug!("Using store {}", store_path.display());

        let store = Store::load(&store_path)
            .with_context(|| format!("Failed to open store {}", store_path.display()))?;

        Ok(Self {
            store,
            config,
            default_time,
        })
    }

    /// How many reminders the short listing shows
    pub fn display_limit(&self) -> usize {
        self.config.display.limit
    }

    /// Clock time for schedules that name only a day
    pub fn default_time(&self) -> NaiveTime {
        self.default_time
    }

    /// The local calendar day schedule tokens are relative to
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Local wall-clock time scheduled reminders are compared against
    pub fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    /// Active reminders that are due right now, newest first
    pub fn due_reminders(&self) -> Vec<&Reminder> {
        self.store.list_due(self.now(), self.default_time)
    }
}
