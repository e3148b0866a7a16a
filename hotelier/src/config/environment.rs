//! Environment variable handling for configuration overrides.
//!
//! `HOTELIER_*` variables override configuration file values.

use std::env;
use std::str::FromStr;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::model::UpdateScope;

/// Overrides `busy_timeout_seconds`.
pub const BUSY_TIMEOUT_ENV: &str = "HOTELIER_BUSY_TIMEOUT";
/// Overrides `search_radius`.
pub const SEARCH_RADIUS_ENV: &str = "HOTELIER_SEARCH_RADIUS";
/// Overrides `recent_limit`.
pub const RECENT_LIMIT_ENV: &str = "HOTELIER_RECENT_LIMIT";
/// Overrides `recent_updates_scope`.
pub const UPDATES_SCOPE_ENV: &str = "HOTELIER_UPDATES_SCOPE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use hotelier::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Applies every set `HOTELIER_*` override to `config`.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the variable if a value does not parse.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(seconds) = Self::read(BUSY_TIMEOUT_ENV)? {
            config.busy_timeout_seconds = Some(seconds);
        }
        if let Some(radius) = Self::read(SEARCH_RADIUS_ENV)? {
            config.search_radius = Some(radius);
        }
        if let Some(limit) = Self::read(RECENT_LIMIT_ENV)? {
            config.recent_limit = Some(limit);
        }
        if let Some(scope) = Self::read::<UpdateScope>(UPDATES_SCOPE_ENV)? {
            config.recent_updates_scope = Some(scope);
        }
        Ok(())
    }

    fn read<T>(name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(name) {
            Ok(raw) if !raw.trim().is_empty() => {
                raw.trim()
                    .parse()
                    .map(Some)
                    .map_err(|e| Error::InvalidInput {
                        field: name.into(),
                        message: format!("invalid value '{raw}': {e}"),
                    })
            }
            _ => Ok(None),
        }
    }
}
