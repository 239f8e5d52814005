use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{zlog_debug, Error, Result};

pub const DEFAULT_STRATEGY: &str = "smart_balance";
pub const DEFAULT_SUGGEST_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Strategy used when the command line does not name one.
    pub default_strategy: Option<String>,
    /// How many tasks `suggest` returns.
    pub suggest_limit: Option<usize>,
    /// Leave tasks without an id unnumbered instead of assigning `position + 1`.
    #[serde(default)]
    pub strict_ids: bool,
}

impl Config {
    pub fn taskrank_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".taskrank"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::taskrank_dir()?.join("taskrank.toml"))
    }

    pub fn effective_strategy(&self) -> &str {
        self.default_strategy.as_deref().unwrap_or(DEFAULT_STRATEGY)
    }

    pub fn effective_suggest_limit(&self) -> usize {
        self.suggest_limit.unwrap_or(DEFAULT_SUGGEST_LIMIT)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        zlog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            zlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        zlog_debug!(
            "Config loaded: default_strategy={:?}, suggest_limit={:?}, strict_ids={}",
            config.default_strategy,
            config.suggest_limit,
            config.strict_ids
        );
        Ok(config)
    }
}
