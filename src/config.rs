use crate::domain::models::{default_shortcuts, Shortcut};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const APP_NAME: &str = "portal-search";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site_name: String,
    /// Catalog URLs are relative to the site root and are resolved against
    /// this. When unset, the current directory is taken as the site root, so
    /// run from a checkout of the site or point this at the hosted site.
    pub base_url: Option<String>,
    /// Program used to open a resolved URL. Platform default when unset.
    pub opener: Option<String>,
    /// Delay between the modal opening and focus landing in its input.
    pub focus_delay_ms: u64,
    /// TOML file replacing the built-in catalog.
    pub catalog: Option<PathBuf>,
    pub shortcuts: Vec<Shortcut>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_name: "Game Cheats & Mods".to_string(),
            base_url: None,
            opener: None,
            focus_delay_ms: 100,
            catalog: None,
            shortcuts: default_shortcuts(),
        }
    }
}

impl Config {
    /// Loads `path` when given (it must exist), otherwise the default config
    /// file if there is one, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `base_url`, or a `file://` URL of the current directory.
    #[must_use]
    pub fn site_root(&self) -> Option<String> {
        if let Some(base) = &self.base_url {
            return Some(base.clone());
        }
        let cwd = std::env::current_dir().ok()?;
        Url::from_directory_path(cwd).ok().map(String::from)
    }

    #[must_use]
    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }
}

#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push(APP_NAME);
        path
    })
}

#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[must_use]
pub fn log_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}
