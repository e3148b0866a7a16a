use std::fmt;

use crate::model::BookingId;

/// Result of a booking attempt that did not fail.
///
/// A taken room is an expected outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum BookingOutcome {
    /// The room was reserved under this booking id.
    Booked(BookingId),
    /// The room is already booked on that date.
    Unavailable,
}

impl BookingOutcome {
    /// Returns the booking id if the room was reserved.
    #[must_use]
    pub const fn booking_id(self) -> Option<BookingId> {
        match self {
            Self::Booked(id) => Some(id),
            Self::Unavailable => None,
        }
    }

    /// Returns `true` if the room was reserved.
    #[must_use]
    pub const fn is_booked(self) -> bool {
        matches!(self, Self::Booked(_))
    }
}

impl fmt::Display for BookingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Booked(id) => write!(f, "booked (booking {id})"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}
