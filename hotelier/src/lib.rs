#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hotelier
//!
//! The consistency core of a hotel booking service.
//!
//! Customers book rooms for single dates, managers update their rooms and
//! file repair requests, and both read aggregate listings. Every write is
//! authorized, validated and applied in one SQLite transaction, so a room
//! is never booked twice for the same date even when several processes race.
//!
//! ## Core Types
//!
//! - [`BookingManager`] and [`BookingOutcome`]: Transactional writes
//! - [`QueryService`]: Read-only listings
//! - [`gate::RoleGate`]: Authentication and role checks
//! - [`Database`] and [`DatabaseConfig`]: The SQLite store
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use hotelier::gate::DatabaseGate;
//! use hotelier::{BookingDate, BookingManager, Database, DatabaseConfig, HotelId, RoomNumber};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/hotelier.db")).unwrap();
//! let gate = DatabaseGate::new();
//! let customer = gate.register_customer(&mut db, "Dana", "hunter2").unwrap();
//!
//! let hotel = HotelId::try_from(1).unwrap();
//! let room = RoomNumber::try_from(101).unwrap();
//! let date: BookingDate = "2024-06-01".parse().unwrap();
//!
//! let outcome = BookingManager::new(&mut db, &gate)
//!     .book_room(customer, hotel, room, date)
//!     .unwrap();
//! println!("{outcome}");
//! ```

pub mod booking;
pub mod config;
pub mod database;
pub mod error;
pub mod gate;
pub mod geo;
pub mod logging;
pub mod model;
pub mod query;

// Re-export key types at crate root for convenience
pub use booking::{BookingManager, BookingOutcome};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use geo::GeoPoint;
pub use logging::{init_logger, LogLevel, Logger};
pub use model::{
    BookingDate, BookingId, BookingRecord, CompanyId, DateRange, Hotel, HotelId,
    InvalidValueError, NewHotel, Price, RegularCustomer, RepairId, RepairRecord, RequestId, Role,
    Room, RoomBooking, RoomNumber, RoomRepair, RoomUpdateLog, UpdateId, UpdateScope, User, UserId,
};
pub use query::{QueryService, DEFAULT_RECENT_LIMIT};
