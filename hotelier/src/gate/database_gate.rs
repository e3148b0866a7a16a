//! `RoleGate` backed by the users and hotels tables.

use std::collections::BTreeSet;

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::{HotelId, Role, UserId};

use super::{CredentialHasher, RoleGate};

/// The production [`RoleGate`]: roles come from the users table, hotel
/// ownership from the hotels table, credentials are Argon2 hashes.
///
/// # Examples
///
/// ```no_run
/// use hotelier::database::{Database, DatabaseConfig};
/// use hotelier::gate::{DatabaseGate, RoleGate};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/hotelier.db")).unwrap();
/// let gate = DatabaseGate::new();
///
/// let id = gate.register_customer(&mut db, "Dana", "hunter2").unwrap();
/// let who = gate.authenticate(db.connection(), id, "hunter2").unwrap();
/// assert_eq!(who, Some(id));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseGate {
    hasher: CredentialHasher,
}

impl DatabaseGate {
    /// Creates a gate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hasher: CredentialHasher::new(),
        }
    }

    /// Registers a user with an explicit role and returns the new id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name or credential, or an error
    /// if the insert fails.
    pub fn register(
        &self,
        db: &mut Database,
        name: &str,
        credential: &str,
        role: Role,
    ) -> Result<UserId> {
        let hash = self.hasher.hash(credential)?;
        let id = db.create_user(name, &hash, role)?;
        log::info!("registered {role} {id}");
        Ok(id)
    }

    /// Registers a customer, the role every self-registered user gets.
    ///
    /// # Errors
    ///
    /// See [`DatabaseGate::register`].
    pub fn register_customer(
        &self,
        db: &mut Database,
        name: &str,
        credential: &str,
    ) -> Result<UserId> {
        self.register(db, name, credential, Role::Customer)
    }

    /// Replaces a user's credential after verifying the current one.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` if the current credential is wrong or the
    /// user is unknown.
    pub fn change_credential(
        &self,
        db: &mut Database,
        user: UserId,
        current: &str,
        replacement: &str,
    ) -> Result<()> {
        let hash = self.hasher.hash(replacement)?;
        db.immediate(|tx| {
            if self.authenticate(tx, user, current)?.is_none() {
                return Err(Error::not_authorized(user, "change credential"));
            }
            Database::update_credential_simple(tx, user, &hash)?;
            Ok(())
        })
    }
}

impl RoleGate for DatabaseGate {
    fn authenticate(
        &self,
        conn: &Connection,
        user: UserId,
        credential: &str,
    ) -> Result<Option<UserId>> {
        let Some(stored) = Database::get_user(conn, user)? else {
            log::debug!("authentication failed: unknown user {user}");
            return Ok(None);
        };
        if self.hasher.verify(credential, &stored.credential_hash)? {
            Ok(Some(stored.id))
        } else {
            log::debug!("authentication failed: wrong credential for user {user}");
            Ok(None)
        }
    }

    fn role(&self, conn: &Connection, user: UserId) -> Result<Option<Role>> {
        Ok(Database::get_user(conn, user)?.map(|u| u.role))
    }

    fn managed_hotels(&self, conn: &Connection, manager: UserId) -> Result<BTreeSet<HotelId>> {
        Database::managed_hotel_ids(conn, manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, seed_hotel};
    use crate::gate::RoleGateExt;

    #[test]
    fn test_register_and_authenticate() {
        let mut db = create_test_database();
        let gate = DatabaseGate::new();

        let id = gate.register_customer(&mut db, "Erin", "pa55").unwrap();
        assert_eq!(gate.authenticate(db.connection(), id, "pa55").unwrap(), Some(id));
        assert_eq!(gate.authenticate(db.connection(), id, "nope").unwrap(), None);
        assert_eq!(gate.role(db.connection(), id).unwrap(), Some(Role::Customer));

        let stored = Database::get_user(db.connection(), id).unwrap().unwrap();
        assert_ne!(stored.credential_hash, "pa55");
    }

    #[test]
    fn test_authenticate_unknown_user() {
        let db = create_test_database();
        let gate = DatabaseGate::new();
        let ghost = UserId::try_from(404).unwrap();
        assert_eq!(gate.authenticate(db.connection(), ghost, "x").unwrap(), None);
        assert_eq!(gate.role(db.connection(), ghost).unwrap(), None);
    }

    #[test]
    fn test_managed_hotels_from_store() {
        let mut db = create_test_database();
        let gate = DatabaseGate::new();
        let manager = gate.register(&mut db, "Mona", "pw", Role::Manager).unwrap();
        let hotel = seed_hotel(&mut db, manager, 0.0, 0.0);

        let managed = gate.managed_hotels(db.connection(), manager).unwrap();
        assert!(managed.contains(&hotel));
        gate.require_hotel_manager(db.connection(), manager, hotel, "update room")
            .unwrap();
    }

    #[test]
    fn test_change_credential() {
        let mut db = create_test_database();
        let gate = DatabaseGate::new();
        let id = gate.register_customer(&mut db, "Finn", "old").unwrap();

        let err = gate.change_credential(&mut db, id, "wrong", "new").unwrap_err();
        assert!(err.is_not_authorized());

        gate.change_credential(&mut db, id, "old", "new").unwrap();
        assert_eq!(gate.authenticate(db.connection(), id, "new").unwrap(), Some(id));
        assert_eq!(gate.authenticate(db.connection(), id, "old").unwrap(), None);
    }
}
