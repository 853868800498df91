//! Viewer configuration loaded from TOML

use std::path::{Path, PathBuf};
use std::time::Duration;

use mdtutor_core::DEFAULT_LANGUAGE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tui::markdown::BlockOptions;
use crate::tui::themes::ThemeMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub theme: ThemeMode,
    /// Language assumed for fences without a tag
    pub default_language: String,
    /// How long the "copied" acknowledgment stays visible
    pub copy_feedback_ms: u64,
    /// Maximum render width; the terminal width when unset
    pub wrap_width: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            copy_feedback_ms: 2000,
            wrap_width: None,
        }
    }
}

impl Config {
    /// `<config dir>/mdtutor/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mdtutor").join("config.toml"))
    }

    /// Load a config file that must exist
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }

    /// Load the file at the default location, falling back to defaults if absent
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn block_options(&self) -> BlockOptions {
        BlockOptions {
            default_language: self.default_language.clone(),
            copy_feedback: self.copy_feedback(),
        }
    }
}
