//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration layers according to precedence.
///
/// # Examples
///
/// ```
/// use hotelier::config::{Config, ConfigMerger};
///
/// let low = Config { recent_limit: Some(3), ..Default::default() };
/// let high = Config { recent_limit: Some(8), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.recent_limit, Some(8));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merges sources into one configuration, lowest precedence first.
    #[must_use]
    pub fn merge(mut sources: Vec<ConfigSource>) -> Config {
        sources.sort_by_key(|source| source.precedence);
        let mut result = Config::default();
        for source in &sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Overwrites every field of `target` that `source` sets.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.busy_timeout_seconds.is_some() {
            target.busy_timeout_seconds = source.busy_timeout_seconds;
        }
        if source.search_radius.is_some() {
            target.search_radius = source.search_radius;
        }
        if source.recent_limit.is_some() {
            target.recent_limit = source.recent_limit;
        }
        if source.recent_updates_scope.is_some() {
            target.recent_updates_scope = source.recent_updates_scope;
        }
    }
}
