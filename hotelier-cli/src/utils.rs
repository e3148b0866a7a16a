//! Utility functions for CLI operations.
//!
//! This module provides the helpers shared across commands: data directory
//! and configuration resolution, opening the database, authenticating the
//! acting user, and parsing and formatting values.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use hotelier::database::{resolve_data_dir, DATABASE_FILE_NAME};
use hotelier::gate::{DatabaseGate, RoleGate};
use hotelier::{BookingDate, Config, ConfigBuilder, Database, DatabaseConfig, UserId};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds).
    pub busy_timeout: Option<u64>,
}

/// Credentials of the user a command acts as.
#[derive(Args, Debug, Clone)]
pub struct AuthArgs {
    /// Your user id
    #[arg(long, value_name = "ID")]
    pub user: UserId,

    /// Your password
    #[arg(long, env = "HOTELIER_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Resolve the data directory: `--data-dir`, then `HOTELIER_DATA_DIR`,
/// then `~/.hotelier`.
pub fn data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => resolve_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load layered configuration from the data directory and the environment.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .with_data_dir(data_dir(global)?)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build the database configuration, preferring `--busy-timeout` over the
/// configured value.
pub fn database_config(
    global: &GlobalOptions,
    config: &Config,
) -> Result<DatabaseConfig, CliError> {
    let path = data_dir(global)?.join(DATABASE_FILE_NAME);
    let timeout = global
        .busy_timeout
        .map_or_else(|| config.busy_timeout(), Duration::from_secs);
    Ok(DatabaseConfig::new(path).with_busy_timeout(timeout))
}

/// Open an existing database.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database has not been initialized.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_config = database_config(global, config)?;
    if !db_config.path.exists() {
        return Err(CliError::NoDataDirectory);
    }
    Database::open(db_config.must_exist()).map_err(CliError::from)
}

/// Verify the acting user's credentials.
///
/// # Errors
///
/// Returns `Rejected` for an unknown user or a wrong password.
pub fn authenticate(
    db: &Database,
    gate: &DatabaseGate,
    auth: &AuthArgs,
) -> Result<UserId, CliError> {
    gate.authenticate(db.connection(), auth.user, &auth.password)?
        .ok_or_else(|| CliError::Rejected("Invalid user id or password".to_string()))
}

/// Parse a date given as `YYYY-MM-DD` or `MM/DD/YYYY`.
pub fn parse_date(s: &str) -> Result<BookingDate, String> {
    let s = s.trim();
    let date = ["%Y-%m-%d", "%m/%d/%Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| format!("'{s}' is not a date (expected YYYY-MM-DD or MM/DD/YYYY)"))?;
    BookingDate::try_from(date).map_err(|e| e.to_string())
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: SystemTime) -> String {
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
