//! Opening the booking store.
//!
//! Every handle runs in WAL mode with foreign keys enforced and a busy
//! timeout, so concurrent bookers queue on the write lock instead of failing.

use rusqlite::{Connection, OpenFlags, TransactionBehavior};

use crate::error::Result;

use super::config::DatabaseConfig;

/// An open handle on the booking store.
///
/// Each thread or process opens its own `Database` on the shared file; no
/// state is shared between handles apart from the file itself.
///
/// # Examples
///
/// ```no_run
/// use hotelier::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/hotelier.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens the store at `config.path`, creating the schema on first use.
    ///
    /// A missing parent directory is created unless the config says the
    /// file must already exist.
    ///
    /// # Errors
    ///
    /// `StoreUnavailable` if the file cannot be opened or locked within the
    /// busy timeout, `UnsupportedSchemaVersion` for a store written by a
    /// newer release, `Io` if the data directory cannot be created.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let mut conn = Connection::open_with_flags(&config.path, flags)?;

        // Busy timeout first: switching to WAL needs the lock on a new file.
        conn.busy_timeout(config.busy_timeout)?;
        if !config.read_only {
            let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
            conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        }
        conn.execute_batch("PRAGMA foreign_keys = ON")?;

        if config.read_only {
            super::migrations::check_schema_compatibility(&conn)?;
        } else {
            // Two processes opening a fresh file must not both initialize it.
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            super::migrations::check_schema_compatibility(&tx)?;
            tx.commit()?;
        }

        log::debug!("opened database at {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Returns the configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}
