//! Transaction management utilities.
//!
//! Every write in the crate runs through [`Database::immediate`]. `BEGIN
//! IMMEDIATE` takes the database write lock before the first read, so a
//! check made inside the closure still holds when the closure writes.

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Runs `f` inside an IMMEDIATE transaction and commits if it succeeds.
    ///
    /// If `f` returns an error the transaction is dropped uncommitted,
    /// which rolls back every statement it executed.
    ///
    /// # Errors
    ///
    /// Returns the error of `f`, or an error if the transaction cannot be
    /// started (for example because the busy timeout expired) or committed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hotelier::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/hotelier.db")).unwrap();
    /// let company = db
    ///     .immediate(|tx| Database::create_company_simple(tx, "Acme Repairs"))
    ///     .unwrap();
    /// ```
    pub fn immediate<T>(&mut self, f: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| {
                let err = crate::Error::from(e);
                if err.is_retryable() {
                    log::warn!("could not acquire write lock: {err}");
                }
                err
            })?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}
