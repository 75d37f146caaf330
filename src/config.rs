//! User settings loaded from `settings.json` in the XDG config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{DEFAULT_PHONE_CODE, PHONE_CODES};

/// Errors that can occur while loading [`Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a config directory.
    #[error("could not determine XDG config directory")]
    NoConfigDir,

    #[error("unsupported default phone code: {0}")]
    UnsupportedPhoneCode(String),

    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// Settings read at startup. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Phone code a fresh form starts with; must be one of [`PHONE_CODES`].
    pub default_phone_code: String,
    /// Whether the password starts revealed.
    pub show_password: bool,
    /// Log level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_phone_code: DEFAULT_PHONE_CODE.to_string(),
            show_password: false,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Returns `~/.config/regform/settings.json` (platform equivalent).
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("regform").join("settings.json"))
    }

    /// Loads settings from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str::<Settings>(&contents)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
            Err(e) => return Err(e.into()),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !PHONE_CODES.contains(&self.default_phone_code.as_str()) {
            return Err(ConfigError::UnsupportedPhoneCode(
                self.default_phone_code.clone(),
            ));
        }
        self.level_filter()?;
        Ok(())
    }

    /// Parses [`log_level`](Self::log_level).
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
