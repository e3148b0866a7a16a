//! Configuration validation.

use crate::config::schema::{Config, MAX_RECENT_LIMIT};
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use hotelier::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { search_radius: Some(-1.0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Checks every set field.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field: a zero busy
    /// timeout, a radius that is not finite and positive, or a limit outside
    /// `1..=100`.
    pub fn validate(config: &Config) -> Result<()> {
        if config.busy_timeout_seconds == Some(0) {
            return Err(invalid(
                "busy_timeout_seconds",
                "timeout must be greater than 0".into(),
            ));
        }

        if let Some(radius) = config.search_radius {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(invalid(
                    "search_radius",
                    format!("radius must be a positive number, got {radius}"),
                ));
            }
        }

        if let Some(limit) = config.recent_limit {
            if !(1..=MAX_RECENT_LIMIT).contains(&limit) {
                return Err(invalid(
                    "recent_limit",
                    format!("limit must be between 1 and {MAX_RECENT_LIMIT}, got {limit}"),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> Error {
    Error::InvalidInput {
        field: field.into(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: Error) -> String {
        match err {
            Error::InvalidInput { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_timeout() {
        let config = Config {
            busy_timeout_seconds: Some(0),
            ..Default::default()
        };
        assert_eq!(
            field_of(ConfigValidator::validate(&config).unwrap_err()),
            "busy_timeout_seconds"
        );
    }

    #[test]
    fn test_radius_bounds() {
        for radius in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let config = Config {
                search_radius: Some(radius),
                ..Default::default()
            };
            assert_eq!(
                field_of(ConfigValidator::validate(&config).unwrap_err()),
                "search_radius"
            );
        }
    }

    #[test]
    fn test_limit_bounds() {
        for (limit, ok) in [(0, false), (1, true), (100, true), (101, false)] {
            let config = Config {
                recent_limit: Some(limit),
                ..Default::default()
            };
            assert_eq!(ConfigValidator::validate(&config).is_ok(), ok, "limit {limit}");
        }
    }
}
