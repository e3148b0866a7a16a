//! Booking transaction manager.
//!
//! Every write follows the same sequence inside a single transaction:
//! authorize, validate, check the invariant, then mutate together with the
//! audit row. A failure at any step leaves the store unchanged.

mod manager;
mod outcome;

pub use manager::BookingManager;
pub use outcome::BookingOutcome;
