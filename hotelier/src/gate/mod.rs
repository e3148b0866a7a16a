//! Session and role gate.
//!
//! The booking manager and query service never look at roles themselves:
//! they ask a [`RoleGate`] through the helpers of [`RoleGateExt`], which
//! turn a missing role or a foreign hotel into `NotAuthorized`.
//!
//! Gate methods receive the connection the caller is working on, so a check
//! made inside a write transaction sees the same snapshot as the write.

mod credentials;
mod database_gate;

use std::collections::BTreeSet;

use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::model::{HotelId, Role, UserId};

pub use credentials::CredentialHasher;
pub use database_gate::DatabaseGate;

/// Answers who a user is and what they may touch.
#[cfg_attr(test, mockall::automock)]
pub trait RoleGate {
    /// Verifies a credential and returns the user it belongs to.
    ///
    /// Returns `Ok(None)` for an unknown user or a wrong credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn authenticate(&self, conn: &Connection, user: UserId, credential: &str)
        -> Result<Option<UserId>>;

    /// Returns the role of a user, or `None` if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn role(&self, conn: &Connection, user: UserId) -> Result<Option<Role>>;

    /// Returns the hotels a manager administers.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn managed_hotels(&self, conn: &Connection, manager: UserId) -> Result<BTreeSet<HotelId>>;
}

/// Authorization checks built on [`RoleGate`].
pub trait RoleGateExt: RoleGate {
    /// Requires `user` to exist, in any role.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` if the user is unknown.
    fn require_user(&self, conn: &Connection, user: UserId, action: &str) -> Result<Role> {
        self.role(conn, user)?
            .ok_or_else(|| Error::not_authorized(user, action))
    }

    /// Requires `user` to be a manager.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` if the user is unknown or a customer.
    fn require_manager(&self, conn: &Connection, user: UserId, action: &str) -> Result<()> {
        match self.role(conn, user)? {
            Some(Role::Manager) => Ok(()),
            _ => Err(Error::not_authorized(user, action)),
        }
    }

    /// Requires `user` to be a manager administering `hotel`.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` if the user is not a manager or does not
    /// administer the hotel.
    fn require_hotel_manager(
        &self,
        conn: &Connection,
        user: UserId,
        hotel: HotelId,
        action: &str,
    ) -> Result<()> {
        self.require_manager(conn, user, action)?;
        if self.managed_hotels(conn, user)?.contains(&hotel) {
            Ok(())
        } else {
            Err(Error::not_authorized(user, action))
        }
    }
}

impl<G: RoleGate + ?Sized> RoleGateExt for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn uid(value: i64) -> UserId {
        UserId::try_from(value).unwrap()
    }

    fn hid(value: i64) -> HotelId {
        HotelId::try_from(value).unwrap()
    }

    #[test]
    fn test_require_user_unknown() {
        let conn = Connection::open_in_memory().unwrap();
        let mut gate = MockRoleGate::new();
        gate.expect_role().returning(|_, _| Ok(None));

        let err = gate.require_user(&conn, uid(3), "book a room").unwrap_err();
        assert!(err.is_not_authorized());
        assert!(err.to_string().contains("book a room"));
    }

    #[test]
    fn test_require_user_any_role() {
        let conn = Connection::open_in_memory().unwrap();
        let mut gate = MockRoleGate::new();
        gate.expect_role()
            .with(mockall::predicate::always(), eq(uid(3)))
            .returning(|_, _| Ok(Some(Role::Customer)));

        assert_eq!(gate.require_user(&conn, uid(3), "book").unwrap(), Role::Customer);
    }

    #[test]
    fn test_require_manager_rejects_customer() {
        let conn = Connection::open_in_memory().unwrap();
        let mut gate = MockRoleGate::new();
        gate.expect_role().returning(|_, _| Ok(Some(Role::Customer)));

        assert!(gate
            .require_manager(&conn, uid(1), "list updates")
            .unwrap_err()
            .is_not_authorized());
    }

    #[test]
    fn test_require_hotel_manager_checks_ownership() {
        let conn = Connection::open_in_memory().unwrap();
        let mut gate = MockRoleGate::new();
        gate.expect_role().returning(|_, _| Ok(Some(Role::Manager)));
        gate.expect_managed_hotels()
            .returning(|_, _| Ok(BTreeSet::from([HotelId::try_from(1).unwrap()])));

        gate.require_hotel_manager(&conn, uid(1), hid(1), "update room")
            .unwrap();
        let err = gate
            .require_hotel_manager(&conn, uid(1), hid(2), "update room")
            .unwrap_err();
        assert!(err.is_not_authorized());
    }

    #[test]
    fn test_require_hotel_manager_skips_hotels_for_customers() {
        let conn = Connection::open_in_memory().unwrap();
        let mut gate = MockRoleGate::new();
        gate.expect_role().returning(|_, _| Ok(Some(Role::Customer)));
        gate.expect_managed_hotels().never();

        assert!(gate
            .require_hotel_manager(&conn, uid(1), hid(1), "update room")
            .is_err());
    }

    #[test]
    fn test_store_errors_propagate() {
        let conn = Connection::open_in_memory().unwrap();
        let mut gate = MockRoleGate::new();
        gate.expect_role()
            .returning(|_, _| Err(Error::not_found("users table")));

        let err = gate.require_manager(&conn, uid(1), "anything").unwrap_err();
        assert!(err.is_not_found());
    }
}
