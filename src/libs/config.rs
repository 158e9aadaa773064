//! Application configuration.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! data directory (see [`DataStorage`]). A missing file is not an error: the
//! defaults below are used, which place the database next to the config file.
//!
//! The database location can also be forced with the `HRDESK_DB` environment
//! variable, read after `.env` has been loaded.
//!
//! ```rust,no_run
//! use hrdesk::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("{}", config.database_path()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::attendance::Location;
use super::data_storage::DataStorage;
use super::hours::DEFAULT_RECENT_LIMIT;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_ENV_VAR: &str = "HRDESK_DB";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Explicit database file; `None` means `employee.db` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Location preselected by the clock-in prompt.
    #[serde(default = "default_location")]
    pub default_location: String,

    /// How many attendance rows the hours report fetches.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_location() -> String {
    Location::HeadOffice.to_string()
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            default_location: default_location(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Resolves the database file: `HRDESK_DB`, then `database`, then the data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    pub fn location(&self) -> Location {
        self.default_location.parse().unwrap_or_default()
    }

    /// Interactive setup, prefilled with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let database: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(
                current
                    .database
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        let presets: Vec<String> = Location::PRESETS.iter().map(ToString::to_string).collect();
        let preselected = presets.iter().position(|p| *p == current.default_location).unwrap_or(0);
        let location_index = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultLocation.to_string())
            .items(&presets)
            .default(preselected)
            .interact()?;

        let recent_limit: usize = Input::with_theme(&theme)
            .with_prompt(Message::PromptRecentLimit.to_string())
            .default(current.recent_limit)
            .interact_text()?;

        Ok(Config {
            database: match database.trim() {
                "" => None,
                path => Some(PathBuf::from(path)),
            },
            default_location: presets[location_index].clone(),
            recent_limit,
        })
    }
}
