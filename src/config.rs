//! Site theme configuration for standalone HTML pages.
//!
//! Keys use the same camelCase names as a Nextra `theme.config.js`, so an
//! existing docs theme can be exported to JSON and reused as is.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Repository link shown in the navigation bar
    pub project_link: String,
    /// Base URL for "edit this page" links
    pub docs_repository_base: String,
    pub title_suffix: String,
    pub dark_mode: bool,
    pub footer: bool,
    pub footer_text: String,
    pub footer_edit_link: String,
    pub logo_text: String,
    pub head: Vec<MetaTag>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            project_link: String::new(),
            docs_repository_base: String::new(),
            title_suffix: String::new(),
            dark_mode: true,
            footer: true,
            footer_text: String::new(),
            footer_edit_link: " Edit this page on GitHub".to_string(),
            logo_text: "abidoc".to_string(),
            head: vec![MetaTag {
                name: "viewport".to_string(),
                content: "width=device-width, initial-scale=1.0".to_string(),
            }],
        }
    }
}

impl SiteConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the explicit config if given, then the per-user config if it
    /// exists, then falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading site config");
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading user site config");
                Self::from_file(&path)
            }
            _ => {
                debug!("using default site config");
                Ok(Self::default())
            }
        }
    }
}

/// `<config dir>/abidoc/site.json`, e.g. `~/.config/abidoc/site.json` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("abidoc").join("site.json"))
}
