use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{MppassError, Result};
use crate::salt::DEFAULT_SALT_FILE;

/// Project-level configuration, loaded from `.mppass.toml`.
///
/// Every field has a default, so the tool works without any config
/// file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Salt file path. Relative paths resolve against the working directory.
    #[serde(default = "default_salt_file")]
    pub salt_file: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_salt_file() -> String {
    DEFAULT_SALT_FILE.to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            salt_file: default_salt_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".mppass.toml";

    /// Load settings from `<project_dir>/.mppass.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            MppassError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    /// The salt path as configured.
    ///
    /// Settings are loaded from the working directory, so a relative path
    /// is kept relative and reads as written in messages.
    pub fn salt_path(&self) -> PathBuf {
        PathBuf::from(&self.salt_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
