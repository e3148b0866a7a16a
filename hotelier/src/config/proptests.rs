//! Property-based tests for the configuration layers.

use super::merger::ConfigMerger;
use super::schema::{Config, MAX_RECENT_LIMIT};
use super::validator::ConfigValidator;
use crate::model::UpdateScope;
use proptest::prelude::*;

fn scope_strategy() -> impl Strategy<Value = UpdateScope> {
    prop_oneof![Just(UpdateScope::OwnHotels), Just(UpdateScope::All)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(0u64..600),
        prop::option::of(-50.0f64..500.0),
        prop::option::of(0u32..200),
        prop::option::of(scope_strategy()),
    )
        .prop_map(|(timeout, radius, limit, scope)| Config {
            busy_timeout_seconds: timeout,
            search_radius: radius,
            recent_limit: limit,
            recent_updates_scope: scope,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A set field in the higher layer always wins, an unset one never erases.
    #[test]
    fn merge_higher_layer_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.busy_timeout_seconds, high.busy_timeout_seconds.or(low.busy_timeout_seconds));
        prop_assert_eq!(merged.search_radius, high.search_radius.or(low.search_radius));
        prop_assert_eq!(merged.recent_limit, high.recent_limit.or(low.recent_limit));
        prop_assert_eq!(merged.recent_updates_scope, high.recent_updates_scope.or(low.recent_updates_scope));
    }

    // Merging a layer onto itself changes nothing.
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Validation accepts exactly the documented ranges.
    #[test]
    fn validation_matches_ranges(config in config_strategy()) {
        let timeout_ok = config.busy_timeout_seconds != Some(0);
        let radius_ok = config.search_radius.map_or(true, |r| r.is_finite() && r > 0.0);
        let limit_ok = config.recent_limit.map_or(true, |l| (1..=MAX_RECENT_LIMIT).contains(&l));

        prop_assert_eq!(
            ConfigValidator::validate(&config).is_ok(),
            timeout_ok && radius_ok && limit_ok
        );
    }

    // Resolved accessors of a valid configuration are usable as-is.
    #[test]
    fn valid_config_resolves_in_range(config in config_strategy()) {
        prop_assume!(ConfigValidator::validate(&config).is_ok());
        prop_assert!(config.search_radius() > 0.0);
        prop_assert!((1..=MAX_RECENT_LIMIT).contains(&config.recent_limit()));
        prop_assert!(!config.busy_timeout().is_zero());
    }
}
