use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::{
    currency::DEFAULT_SYMBOL,
    domain::{Budget, DEFAULT_WEEKLY_BUDGET},
    utils::persistence::{read_optional, write_atomic},
};

const HOME_ENV: &str = "WEEKLY_BUDGET_HOME";
const DEFAULT_DIR_NAME: &str = ".weekly_budget";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// User preferences that seed a fresh session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    /// Weekly budget applied until the user saves one.
    #[serde(default = "Config::default_budget_value")]
    pub default_budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            default_budget: Self::default_budget_value(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        DEFAULT_SYMBOL.into()
    }

    pub fn default_budget_value() -> f64 {
        DEFAULT_WEEKLY_BUDGET
    }

    /// Configured default budget, or the built-in one when the configured
    /// value is not a positive number.
    pub fn budget(&self) -> Budget {
        Budget::new(self.default_budget).unwrap_or_default()
    }

    /// `WEEKLY_BUDGET_HOME`, then `data_dir`, then `~/.weekly_budget`.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        if let Some(path) = &self.data_dir {
            return path.clone();
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_base_dir(base: &Path) -> Result<Self, ConfigError> {
        fs::create_dir_all(base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        match read_optional(&self.path)? {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => Ok(Config::default()),
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }
}
