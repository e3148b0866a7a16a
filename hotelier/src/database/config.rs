//! Where the store lives and how a handle on it behaves.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "HOTELIER_DATA_DIR";

/// File name of the database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "hotelier.db";

/// Default busy timeout applied to every connection.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Parameters for [`Database::open`](super::Database::open).
///
/// # Examples
///
/// ```
/// use hotelier::database::DatabaseConfig;
/// use std::time::Duration;
///
/// // Create a configuration with default settings
/// let config = DatabaseConfig::new("/tmp/hotelier.db");
///
/// // Customize the configuration
/// let config = DatabaseConfig::new("/tmp/hotelier.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long a connection waits on the write lock before giving up.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// A writable store at `path` with the default busy timeout, created on
    /// first open.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelier::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/hotelier.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }

    /// Disables creation of a missing database file.
    #[must_use]
    pub fn must_exist(mut self) -> Self {
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.hotelier`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".hotelier"))
        .ok_or_else(|| Error::InvalidInput {
            field: "home_directory".into(),
            message: "cannot determine home directory".into(),
        })
}

/// Resolves the data directory.
///
/// `HOTELIER_DATA_DIR` wins over the default `~/.hotelier`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `HOTELIER_DATA_DIR` is not set.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Path of `hotelier.db` inside the resolved data directory.
///
/// # Errors
///
/// Same as [`resolve_data_dir`].
///
/// # Examples
///
/// ```no_run
/// use hotelier::database::resolve_database_path;
///
/// let db_path = resolve_database_path().unwrap();
/// println!("Database path: {}", db_path.display());
/// ```
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir()?.join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_new() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_config_with_busy_timeout() {
        let config =
            DatabaseConfig::new("/tmp/test.db").with_busy_timeout(Duration::from_millis(250));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_config_must_exist() {
        let config = DatabaseConfig::new("/tmp/test.db").must_exist();
        assert!(!config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    #[serial]
    fn test_resolve_database_path() {
        std::env::remove_var(DATA_DIR_ENV);
        if home::home_dir().is_some() {
            let path = resolve_database_path().unwrap();
            assert!(path.ends_with(".hotelier/hotelier.db"));
        }

        std::env::set_var(DATA_DIR_ENV, "/custom/data");
        let path = resolve_database_path().unwrap();
        assert_eq!(path, PathBuf::from("/custom/data/hotelier.db"));

        std::env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    #[serial]
    fn test_empty_data_dir_falls_back_to_default() {
        std::env::set_var(DATA_DIR_ENV, "");
        if let Some(home) = home::home_dir() {
            assert_eq!(resolve_data_dir().unwrap(), home.join(".hotelier"));
        }
        std::env::remove_var(DATA_DIR_ENV);
    }
}
