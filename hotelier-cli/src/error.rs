//! CLI-specific error types with exit codes.
//!
//! Library errors are wrapped and mapped to exit codes here; the library
//! itself never prints.

use std::fmt;

use hotelier::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// A request the store refused as a matter of business: wrong
    /// credentials, a taken room, a missing hotel.
    Rejected(String),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// The store stayed locked past the busy timeout.
    Busy(LibError),

    /// The database has not been initialized.
    NoDataDirectory,

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Business rejection (not authorized, not found, unavailable)
    /// - 2: Store busy, retry later
    /// - 3: No database in the data directory
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Rejected(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::NotAuthorized { .. }
                | LibError::NotFound { .. }
                | LibError::ConstraintViolation { .. } => 1,
                LibError::InvalidInput { .. } => 4,
                LibError::Io(_) => 5,
                LibError::Configuration(_) | LibError::ConfigurationFile { .. } => 7,
                _ => 6,
            },
            CliError::Busy(_) => 2,
            CliError::NoDataDirectory => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Rejected(msg) => write!(f, "{msg}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Busy(e) => write!(f, "Store is busy, try again: {e}"),
            CliError::NoDataDirectory => {
                write!(f, "No database found (run `hotelier init` or use --data-dir)")
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) | CliError::Busy(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if e.is_retryable() {
            CliError::Busy(e)
        } else {
            CliError::Library(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
