//! Configuration schema definitions.
//!
//! Every field is optional so that layers (file, environment, explicit
//! overrides) can be merged field by field. The resolved accessors fall back
//! to the library defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::DEFAULT_BUSY_TIMEOUT;
use crate::geo::DEFAULT_SEARCH_RADIUS;
use crate::model::UpdateScope;
use crate::query::DEFAULT_RECENT_LIMIT;

/// Largest accepted listing limit.
pub const MAX_RECENT_LIMIT: u32 = 100;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use hotelier::config::Config;
///
/// let config: Config = serde_yaml::from_str("search_radius: 12.5\n").unwrap();
/// assert_eq!(config.search_radius(), 12.5);
/// assert_eq!(config.recent_limit(), 5);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seconds a connection waits on the write lock before reporting the
    /// store as unavailable.
    pub busy_timeout_seconds: Option<u64>,

    /// Radius used by nearby-hotel searches when none is given.
    pub search_radius: Option<f64>,

    /// Number of rows returned by "recent" listings when none is given.
    pub recent_limit: Option<u32>,

    /// Default scope of the recent room updates listing.
    pub recent_updates_scope: Option<UpdateScope>,
}

impl Config {
    /// Busy timeout, defaulting to five seconds.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        self.busy_timeout_seconds
            .map_or(DEFAULT_BUSY_TIMEOUT, Duration::from_secs)
    }

    /// Search radius, defaulting to [`DEFAULT_SEARCH_RADIUS`].
    #[must_use]
    pub fn search_radius(&self) -> f64 {
        self.search_radius.unwrap_or(DEFAULT_SEARCH_RADIUS)
    }

    /// Listing limit, defaulting to [`DEFAULT_RECENT_LIMIT`].
    #[must_use]
    pub fn recent_limit(&self) -> u32 {
        self.recent_limit.unwrap_or(DEFAULT_RECENT_LIMIT)
    }

    /// Recent updates scope, defaulting to the manager's own hotels.
    #[must_use]
    pub fn recent_updates_scope(&self) -> UpdateScope {
        self.recent_updates_scope.unwrap_or_default()
    }
}
