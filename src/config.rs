//! Resolves which file the round-trip reads. An explicit argument wins, then
//! the `PEM_ROUNDTRIP_PATH` variable, then a JSON config file named by
//! `PEM_ROUNDTRIP_CONFIG`, then the bundled sample key.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const PATH_ENV: &str = "PEM_ROUNDTRIP_PATH";
pub const CONFIG_ENV: &str = "PEM_ROUNDTRIP_CONFIG";
pub const DEFAULT_PATH: &str = "testdata/sample_key.pem";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file unreadable: {0}")]
    Io(String),
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RoundTripConfig {
    /// Location of the text file to round-trip.
    pub path: PathBuf,
}

impl RoundTripConfig {
    /// Loads a JSON config file. A relative `path` inside it is taken relative
    /// to the config file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(format!("{e}")))?;
        let mut config: Self =
            serde_json::from_str(&raw).map_err(|e| ConfigError::Parse(format!("{e}")))?;
        if config.path.is_relative() {
            if let Some(dir) = path.parent() {
                config.path = dir.join(&config.path);
            }
        }
        Ok(config)
    }

    /// Applies the resolution order using the process environment.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        Self::resolve_with(explicit, |name| std::env::var(name).ok())
    }

    fn resolve_with<F>(explicit: Option<&str>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            return Ok(Self { path: path.into() });
        }
        if let Some(path) = lookup(PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(Self { path: path.into() });
        }
        if let Some(config_path) = lookup(CONFIG_ENV).filter(|p| !p.is_empty()) {
            log::debug!("loading config from {config_path}");
            return Self::load(config_path);
        }
        Ok(Self {
            path: DEFAULT_PATH.into(),
        })
    }
}
