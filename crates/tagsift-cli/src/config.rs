use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tagsift_core::{ExtractionConfig, TagsiftError};

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub extraction: ExtractionConfig,
}

impl AppConfig {
    /// Load config: an explicit file if given, else the user config file if
    /// it exists, else built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, TagsiftError> {
        match path {
            Some(explicit) => Self::from_file(explicit),
            None => {
                let user_path = Self::config_path();
                if user_path.exists() {
                    Self::from_file(&user_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, TagsiftError> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| TagsiftError::Config(e.to_string()))
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "tagsift")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
