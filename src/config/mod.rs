//! Application configuration loading and persistence.
//!
//! A single value is persisted: the default directory under which folder
//! searches run. The config lives as TOML in the platform config directory
//! (e.g. `~/.config/fop/config.toml` on Linux, `%APPDATA%\fop\config\` on
//! Windows). Loading never fails: a missing or unreadable file falls back
//! to the platform root, and saving is best-effort.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{FopError, Result};

const CONFIG_FILE: &str = "config.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base directory whose immediate subfolders are searched.
    pub default_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_directory: fallback_root(),
        }
    }
}

/// Platform root used when no default directory has been configured.
pub fn fallback_root() -> PathBuf {
    #[cfg(windows)]
    {
        PathBuf::from(r"C:\")
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/")
    }
}

/// Platform-specific configuration directory for the application.
pub fn config_directory() -> Option<PathBuf> {
    ProjectDirs::from("com", "fop", "fop").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Platform-specific directory for log files.
pub fn log_directory() -> Option<PathBuf> {
    ProjectDirs::from("com", "fop", "fop").map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Full path to the configuration file.
fn config_file_path() -> Option<PathBuf> {
    config_directory().map(|dir| dir.join(CONFIG_FILE))
}

impl Config {
    /// Load the configuration, falling back to defaults on any failure.
    ///
    /// A missing file is normal on first start and logged at debug level;
    /// a file that exists but cannot be read or parsed is logged as a
    /// warning. Neither aborts the application.
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            tracing::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Best-effort save to the platform config location.
    ///
    /// Persistence failures are logged and dropped; the in-memory value
    /// stays authoritative for the rest of the session.
    pub fn persist(&self) {
        let Some(path) = config_file_path() else {
            tracing::warn!("Could not determine config directory, not saving config");
            return;
        };

        if let Err(e) = self.save_to(&path) {
            tracing::warn!("Failed to save config to {:?}: {}", path, e);
        } else {
            tracing::info!("Saved config to {:?}", path);
        }
    }

    /// Read and parse a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| FopError::Config(e.to_string()))
    }

    /// Serialize and write the config to an explicit path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self).map_err(|e| FopError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_platform_root() {
        let config = Config::default();
        assert_eq!(config.default_directory, fallback_root());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            default_directory: PathBuf::from("/home/user/My Projects"),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_round_trip_preserves_backslashes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            default_directory: PathBuf::from(r"C:\Users\test\Documents and Settings"),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_directory, config.default_directory);
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_load_from_invalid_toml_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_directory = [not valid").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_to_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.toml");

        let config = Config::default();
        config.save_to(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_missing_key_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_directory, fallback_root());
    }
}
