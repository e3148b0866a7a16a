//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A configuration loaded from one file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Where the configuration came from.
    pub path: PathBuf,
    /// Higher precedence wins when merging.
    pub precedence: u8,
    /// The parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `<data_dir>/config.yaml` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(data_dir: &Path) -> Result<Option<ConfigSource>> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("no configuration file at {}", path.display());
            return Ok(None);
        }
        let config = Self::load_file(&path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(Some(ConfigSource {
            path,
            precedence: 1,
            config,
        }))
    }

    /// Loads and parses a YAML configuration file.
    ///
    /// An empty file is the empty configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationFile` if the file cannot be read and
    /// `Configuration` if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigurationFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let err = ConfigLoader::load_file(Path::new("/nonexistent/hotelier/config.yaml"))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigurationFile { .. }));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        fs::write(&path, "search_radius: [1, 2").unwrap();

        let err = ConfigLoader::load_file(&path).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "\n").unwrap();

        assert_eq!(ConfigLoader::load_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_user_config_absent() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ConfigLoader::load_user_config(temp_dir.path())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_user_config_present() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "recent_limit: 7\n").unwrap();

        let source = ConfigLoader::load_user_config(temp_dir.path())
            .unwrap()
            .unwrap();
        assert_eq!(source.precedence, 1);
        assert_eq!(source.config.recent_limit, Some(7));
    }
}
