//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::database::resolve_data_dir;
use crate::error::Result;

/// Builds the effective configuration.
///
/// Layers, lowest precedence first: built-in defaults, the data directory's
/// `config.yaml`, `HOTELIER_*` variables, then the explicit override.
///
/// # Examples
///
/// ```
/// use hotelier::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { recent_limit: Some(10), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.recent_limit(), 10);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads the file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Does not read `config.yaml`.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Does not read `HOTELIER_*` variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Reads `config.yaml` from `dir` instead of the resolved data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Applies `config` on top of every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merges the layers and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed,
    /// an environment variable does not parse, or the merged configuration
    /// is invalid.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();
        if !self.skip_files {
            let data_dir = match self.data_dir {
                Some(dir) => dir,
                None => resolve_data_dir()?,
            };
            sources.extend(ConfigLoader::load_user_config(&data_dir)?);
        }

        let mut config = ConfigMerger::merge(sources);
        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }
        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::RECENT_LIMIT_ENV;
    use crate::config::loader::CONFIG_FILE_NAME;
    use crate::error::Error;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_precedence_file_env_override() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "recent_limit: 3\nsearch_radius: 8.0\nbusy_timeout_seconds: 2\n",
        )
        .unwrap();
        std::env::set_var(RECENT_LIMIT_ENV, "4");

        let config = ConfigBuilder::new()
            .with_data_dir(temp_dir.path())
            .with_config(Config {
                busy_timeout_seconds: Some(7),
                ..Default::default()
            })
            .build();
        std::env::remove_var(RECENT_LIMIT_ENV);
        let config = config.unwrap();

        assert_eq!(config.search_radius, Some(8.0));
        assert_eq!(config.recent_limit, Some(4));
        assert_eq!(config.busy_timeout_seconds, Some(7));
    }

    #[test]
    fn test_invalid_file_value_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "recent_limit: 0\n").unwrap();

        let err = ConfigBuilder::new()
            .skip_env()
            .with_data_dir(temp_dir.path())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref field, .. } if field == "recent_limit"));
    }

    #[test]
    fn test_override_can_fix_file_value() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "search_radius: -1\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_env()
            .with_data_dir(temp_dir.path())
            .with_config(Config {
                search_radius: Some(1.0),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.search_radius, Some(1.0));
    }
}
