//! Positive integer identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::InvalidValueError;

macro_rules! positive_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Returns the underlying integer value.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = InvalidValueError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                if value < 1 {
                    Err(InvalidValueError::new(
                        $field,
                        format!("{value} is not a positive number"),
                    ))
                } else {
                    Ok(Self(value))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = InvalidValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i64 = s.trim().parse().map_err(|_| {
                    InvalidValueError::new($field, format!("'{s}' is not a number"))
                })?;
                Self::try_from(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

positive_id!(
    /// Identifier of a registered user.
    ///
    /// ```
    /// use hotelier::UserId;
    ///
    /// assert_eq!(UserId::try_from(42).unwrap().value(), 42);
    /// assert!(UserId::try_from(0).is_err());
    /// ```
    UserId,
    "user id"
);
positive_id!(
    /// Identifier of a hotel.
    HotelId,
    "hotel id"
);
positive_id!(
    /// Room number, unique within its hotel.
    RoomNumber,
    "room number"
);
positive_id!(
    /// Identifier generated for a booking.
    BookingId,
    "booking id"
);
positive_id!(
    /// Identifier generated for a room update log entry.
    UpdateId,
    "update id"
);
positive_id!(
    /// Identifier generated for a room repair.
    RepairId,
    "repair id"
);
positive_id!(
    /// Identifier generated for a repair request link.
    RequestId,
    "request id"
);
positive_id!(
    /// Identifier of a maintenance company.
    CompanyId,
    "company id"
);
