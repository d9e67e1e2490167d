//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use minimart_commerce::Locale;
use minimart_storage::FileStore;

use crate::config::StoreConfig;
use crate::output::Output;

/// Default config file names, searched upward from the working directory.
const CONFIG_NAMES: [&str; 2] = ["minimart.toml", ".minimart.toml"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StoreConfig,
    /// Path the config is saved to.
    pub config_path: PathBuf,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Locale for listings and messages.
    pub locale: Locale,
}

impl Context {
    /// Load context from a config file.
    pub fn load(
        config_path: Option<&str>,
        locale_override: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (StoreConfig::load(path)?, PathBuf::from(path))
        } else {
            Self::find_config(&cwd)
                .unwrap_or_else(|| (StoreConfig::default(), cwd.join(CONFIG_NAMES[0])))
        };

        let locale_code = locale_override.unwrap_or(&config.store.locale);
        let locale = Locale::from_code(locale_code)
            .with_context(|| format!("Unknown locale: {}", locale_code))?;

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            locale,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<(StoreConfig, PathBuf)> {
        let mut current = start.clone();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = StoreConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Open the durable storage file.
    pub fn open_storage(&self) -> Result<FileStore> {
        let path = self.resolve_path(&self.config.storage.data_file);
        FileStore::open(&path)
            .with_context(|| format!("Failed to open data file: {}", path.display()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Current Unix timestamp.
    pub fn now() -> i64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}
