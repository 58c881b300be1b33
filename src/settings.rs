//! Settings for the endpoint demo, read from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where the demo looks for an endpoint, in order, and how loudly it logs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub config_file: PathBuf,
    pub config_key: String,
    pub env_var: String,
    pub fallback: String,
    pub log_level: String,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from("endpoint.toml"),
            config_key: "endpoint.hostname".to_string(),
            env_var: "ENDPOINT".to_string(),
            fallback: "some-endpoint".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DemoSettings {
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
