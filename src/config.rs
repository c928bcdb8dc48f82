// User configuration loaded from a YAML file

use crate::sort::SortOrder;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// User preferences. This is not task state; the task list itself is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sort order applied when the app starts
    pub default_sort: SortOrder,
    /// Whether terminal output uses colour
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_sort: SortOrder::default(),
            color: true,
        }
    }
}

impl Config {
    /// Default location: `<platform config dir>/todostore/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("todostore").join("config.yaml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults; fields absent from the file fall
    /// back individually.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Config::default()),
            },
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_sort, SortOrder::NameAscending);
        assert!(config.color);
    }

    #[test]
    fn test_load_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "default_sort: date-descending\ncolor: false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.default_sort, SortOrder::DateDescending);
        assert!(!config.color);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "default_sort: name-descending\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.default_sort, SortOrder::NameDescending);
        assert!(config.color);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "default_sort: [not, a, sort]\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
