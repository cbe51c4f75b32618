//! Configuration management for d2power CLI

use anyhow::{Context, Result};
use d2power::PowerCaps;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Season caps that differ from the built-in defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CapOverrides {
    pub soft_cap: Option<u32>,
    pub powerful_cap: Option<u32>,
    pub pinnacle_cap: Option<u32>,
}

impl CapOverrides {
    pub fn is_empty(&self) -> bool {
        self.soft_cap.is_none() && self.powerful_cap.is_none() && self.pinnacle_cap.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub manifest_path: Option<PathBuf>,
    pub profile_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "CapOverrides::is_empty")]
    pub caps: CapOverrides,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("d2power");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Default caps with the configured overrides applied
    pub fn power_caps(&self) -> PowerCaps {
        let defaults = PowerCaps::default();
        PowerCaps {
            soft_cap: self.caps.soft_cap.unwrap_or(defaults.soft_cap),
            powerful_cap: self.caps.powerful_cap.unwrap_or(defaults.powerful_cap),
            pinnacle_cap: self.caps.pinnacle_cap.unwrap_or(defaults.pinnacle_cap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.power_caps(), PowerCaps::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            manifest_path: Some(PathBuf::from("/data/manifest.json")),
            profile_path: None,
            caps: CapOverrides {
                soft_cap: Some(2010),
                ..CapOverrides::default()
            },
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.power_caps().soft_cap, 2010);
        assert_eq!(loaded.power_caps().pinnacle_cap, 2000);
    }

    #[test]
    fn test_empty_caps_not_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        Config::default().save_to(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("[caps]"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "manifest_path = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
