use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::agenda::EventOrder;
use crate::theme::ThemeConfig;

pub const APP_DIR: &str = "agenda-tui";
const DEFAULT_TITLE: &str = "Agenda de la guilde DEV";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub event_order: EventOrder,
    /// Replaces the bundled event list when set.
    pub events_file: Option<PathBuf>,
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            event_order: EventOrder::default(),
            events_file: None,
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read the config at `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })
    }

    /// Load the user config, falling back to defaults when it is absent or broken.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            log::info!("no config directory, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Ok(None) => {
                log::debug!("{} not found, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("{}: {}, using defaults", err, error_source(&err));
                Self::default()
            }
        }
    }
}

fn error_source(err: &ConfigError) -> String {
    std::error::Error::source(err)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join(APP_DIR))
}
