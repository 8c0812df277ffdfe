use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::info;

use crate::{
    core::{RoundStore, DEFAULT_RECENT_LIMIT},
    errors::{CoreError, Result},
    storage::JsonFileStore,
    strokes::{BaselineTable, StrokesGainedCalculator},
    utils::paths,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where the key-value store lives; defaults to `<base>/store`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Custom baseline table (JSON, green distances in feet).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_path: Option<PathBuf>,
    /// Extra tracing directive, e.g. `bitbybit_core=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    /// How many rounds [`RoundStore::recent_rounds`] lists.
    #[serde(default = "Config::default_recent_rounds")]
    pub recent_rounds_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            baseline_path: None,
            log_filter: None,
            recent_rounds_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl Config {
    fn default_recent_rounds() -> usize {
        DEFAULT_RECENT_LIMIT
    }

    /// Calculator over the configured baseline, or the built-in one.
    pub fn calculator(&self) -> Result<StrokesGainedCalculator> {
        match &self.baseline_path {
            Some(path) => {
                let table = BaselineTable::load(path)?;
                info!(path = %path.display(), "custom baseline loaded");
                Ok(StrokesGainedCalculator::new(Arc::new(table)))
            }
            None => Ok(StrokesGainedCalculator::default()),
        }
    }
}

/// Loads and saves [`Config`] under an application base directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)
            .map_err(|err| CoreError::Config(format!("cannot create {}: {err}", base.display())))?;
        let path = paths::config_file_in(&base);
        Ok(Self { base, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)
            .map_err(|err| CoreError::Config(format!("cannot read config: {err}")))?;
        serde_json::from_str(&data)
            .map_err(|err| CoreError::Config(format!("invalid config file: {err}")))
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        paths::write_atomic(&self.path, &json)
    }

    /// Directory the store files go to for `config`.
    pub fn store_dir(&self, config: &Config) -> PathBuf {
        config
            .data_dir
            .clone()
            .unwrap_or_else(|| paths::store_dir_in(&self.base))
    }

    /// Opens the file-backed round store described by `config`.
    pub fn open_store(&self, config: &Config) -> Result<RoundStore> {
        let store = JsonFileStore::new(self.store_dir(config))?;
        Ok(RoundStore::new(Box::new(store)).with_recent_limit(config.recent_rounds_limit))
    }
}
