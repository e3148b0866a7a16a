//! Error types for the hotelier library.
//!
//! This module provides the error taxonomy shared by the repository layer,
//! the booking transaction manager and the query service, using `thiserror`
//! for ergonomic error handling.

use std::path::PathBuf;

use rusqlite::{ffi, ErrorCode};
use thiserror::Error;

/// Result type alias for operations that may fail with a hotelier error.
///
/// # Examples
///
/// ```
/// use hotelier::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(101)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hotelier library.
///
/// Business rejections (`NotAuthorized`, `NotFound`, `ConstraintViolation`,
/// `InvalidInput`) are returned as typed values. Store failures are split
/// into the retryable `StoreUnavailable` and everything else (`Database`).
#[derive(Debug, Error)]
pub enum Error {
    /// The caller lacks the role or hotel ownership the action requires.
    #[error("user {user} is not authorized to {action}")]
    NotAuthorized {
        /// The acting user id.
        user: i64,
        /// The action that was refused.
        action: String,
    },

    /// A referenced hotel, room, user or company does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A uniqueness invariant would have been broken.
    #[error("constraint violation: {details}")]
    ConstraintViolation {
        /// Details about the violated constraint.
        details: String,
    },

    /// A caller supplied a malformed value.
    #[error("invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The store could not be reached or stayed locked past the busy timeout.
    #[error("store unavailable: {source}")]
    StoreUnavailable {
        /// The underlying store error.
        #[source]
        source: rusqlite::Error,
    },

    /// Any other database error.
    #[error("database error: {0}")]
    Database(rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration file exists but could not be read.
    #[error("cannot read configuration {}: {reason}", path.display())]
    ConfigurationFile {
        /// The configuration file path.
        path: PathBuf,
        /// Why the file could not be read.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        let failure = match &err {
            rusqlite::Error::SqliteFailure(failure, _) => Some((failure.code, failure.extended_code)),
            _ => None,
        };

        match failure {
            Some((ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked | ErrorCode::CannotOpen, _)) => {
                Self::StoreUnavailable { source: err }
            }
            Some((ErrorCode::ConstraintViolation, extended))
                if extended == ffi::SQLITE_CONSTRAINT_UNIQUE
                    || extended == ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
            {
                Self::ConstraintViolation {
                    details: err.to_string(),
                }
            }
            Some((ErrorCode::ConstraintViolation, extended))
                if extended == ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
            {
                Self::NotFound {
                    resource: format!("referenced row ({err})"),
                }
            }
            _ => Self::Database(err),
        }
    }
}

impl From<crate::model::InvalidValueError> for Error {
    fn from(err: crate::model::InvalidValueError) -> Self {
        Self::InvalidInput {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Builds a `NotAuthorized` error for `user` attempting `action`.
    pub(crate) fn not_authorized(user: crate::UserId, action: &str) -> Self {
        Self::NotAuthorized {
            user: user.value(),
            action: action.to_string(),
        }
    }

    /// Builds a `NotFound` error for the described resource.
    pub(crate) fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Check if the failed operation may succeed when retried.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelier::Error;
    ///
    /// let err = Error::NotFound { resource: "hotel 9".into() };
    /// assert!(!err.is_retryable());
    /// ```
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }

    /// Check if the error is an authorization refusal.
    #[must_use]
    pub fn is_not_authorized(&self) -> bool {
        matches!(self, Self::NotAuthorized { .. })
    }

    /// Check if the error reports a missing resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(code: std::os::raw::c_int) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), Some("test failure".into()))
    }

    #[test]
    fn test_not_authorized_error() {
        let err = Error::NotAuthorized {
            user: 7,
            action: "update room 101".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("user 7"));
        assert!(display.contains("not authorized"));
        assert!(display.contains("update room 101"));
        assert!(err.is_not_authorized());
    }

    #[test]
    fn test_invalid_input_error() {
        let err = Error::InvalidInput {
            field: "price".to_string(),
            message: "must be non-negative".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid input"));
        assert!(display.contains("price"));
        assert!(display.contains("must be non-negative"));
    }

    #[test]
    fn test_busy_is_store_unavailable() {
        let err: Error = sqlite_failure(ffi::SQLITE_BUSY).into();
        assert!(matches!(err, Error::StoreUnavailable { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_locked_is_store_unavailable() {
        let err: Error = sqlite_failure(ffi::SQLITE_LOCKED).into();
        assert!(err.is_retryable());
    }

    #[test]
    fn test_unique_is_constraint_violation() {
        let err: Error = sqlite_failure(ffi::SQLITE_CONSTRAINT_UNIQUE).into();
        assert!(matches!(err, Error::ConstraintViolation { .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_primary_key_is_constraint_violation() {
        let err: Error = sqlite_failure(ffi::SQLITE_CONSTRAINT_PRIMARYKEY).into();
        assert!(matches!(err, Error::ConstraintViolation { .. }));
    }

    #[test]
    fn test_foreign_key_is_not_found() {
        let err: Error = sqlite_failure(ffi::SQLITE_CONSTRAINT_FOREIGNKEY).into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_failures_stay_database_errors() {
        let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, Error::Database(_)));
        assert!(format!("{err}").contains("database error"));
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
