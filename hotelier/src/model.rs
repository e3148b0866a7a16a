//! Domain types for hotels, rooms, bookings and audit records.
//!
//! Identifier and value types are validated once at construction, so the
//! repository and transaction layers never see a negative id, a negative
//! price or a malformed date.

mod date;
mod ids;
mod price;
mod records;

#[cfg(test)]
mod proptests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub(crate) use date::DATE_FORMAT;
pub use date::{BookingDate, DateRange};
pub use ids::{BookingId, CompanyId, HotelId, RepairId, RequestId, RoomNumber, UpdateId, UserId};
pub use price::Price;
pub use records::{
    BookingRecord, Hotel, NewHotel, RegularCustomer, RepairRecord, Room, RoomBooking, RoomRepair,
    RoomUpdateLog, User,
};

/// Error produced when a raw value fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValueError {
    /// The field being validated.
    pub field: String,
    /// Why the value was rejected.
    pub message: String,
}

impl InvalidValueError {
    pub(crate) fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for InvalidValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for InvalidValueError {}

/// The role a user acts in.
///
/// # Examples
///
/// ```
/// use hotelier::Role;
///
/// assert_eq!("manager".parse::<Role>().unwrap(), Role::Manager);
/// assert_eq!(Role::Customer.as_str(), "customer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Books rooms and views their own bookings.
    Customer,
    /// Administers one or more hotels.
    Manager,
}

impl Role {
    /// Returns the stored representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InvalidValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" => Ok(Self::Customer),
            "manager" => Ok(Self::Manager),
            other => Err(InvalidValueError::new(
                "role",
                format!("unknown role '{other}'"),
            )),
        }
    }
}

/// Which hotels a recent-updates listing covers.
///
/// `OwnHotels` is the default: a manager only sees updates of hotels they
/// administer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateScope {
    /// Only hotels administered by the requesting manager.
    #[default]
    OwnHotels,
    /// Every hotel in the store.
    All,
}

impl FromStr for UpdateScope {
    type Err = InvalidValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "own-hotels" | "own" => Ok(Self::OwnHotels),
            "all" => Ok(Self::All),
            other => Err(InvalidValueError::new(
                "scope",
                format!("expected 'own-hotels' or 'all', got '{other}'"),
            )),
        }
    }
}

impl fmt::Display for UpdateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OwnHotels => f.write_str("own-hotels"),
            Self::All => f.write_str("all"),
        }
    }
}
