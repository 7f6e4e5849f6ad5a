use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{JdfError, Result};
use crate::targets::TargetDictionary;

/// CLI-shell state remembered across invocations.
///
/// The core import pipeline never reads this; the command layer loads it,
/// passes the values in as plain arguments, and writes it back afterwards.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Path of the last dictionary file imported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_path: Option<String>,

    /// Target dictionary to use when `--target` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Config {
    /// Load config from ~/.jdfconv/config.toml.
    /// Returns a default config if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = config_file_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| JdfError::Io {
            path: path.clone(),
            source: e,
        })?;
        toml::from_str(&raw).map_err(|e| JdfError::TomlParse { path, source: e })
    }

    /// Save config to ~/.jdfconv/config.toml.
    pub fn save(&self) -> Result<()> {
        let path = config_file_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| JdfError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| JdfError::ConfigError {
            msg: format!("failed to serialize config: {e}"),
        })?;
        std::fs::write(&path, content).map_err(|e| JdfError::Io { path, source: e })
    }

    /// Resolve the configured default target, falling back to the default
    /// dictionary when unset.
    pub fn default_target(&self) -> Result<TargetDictionary> {
        match &self.target {
            Some(name) => TargetDictionary::from_str(name),
            None => Ok(TargetDictionary::Default),
        }
    }
}

/// Root directory for jdfconv state: ~/.jdfconv/
fn jdfconv_dir() -> PathBuf {
    home_dir().join(".jdfconv")
}

fn config_file_path() -> PathBuf {
    jdfconv_dir().join("config.toml")
}

/// Resolve the user's home directory.
///
/// Uses the `HOME` environment variable on Unix (the shell's value), falling
/// back to `dirs::home_dir()` (passwd lookup) if it is unset or empty.
fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .ok()
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
