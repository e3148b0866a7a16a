//! Database layer for persistent storage of hotels, rooms and bookings.
//!
//! This module provides a SQLite-based storage layer, including connection
//! management, schema versioning, typed CRUD operations and the read
//! projections used by the query service.
//!
//! # Examples
//!
//! ```no_run
//! use hotelier::database::{Database, DatabaseConfig};
//! use hotelier::{BookingDate, HotelId};
//!
//! let config = DatabaseConfig::new("/tmp/hotelier.db");
//! let db = Database::open(config).unwrap();
//!
//! let hotel = HotelId::try_from(1).unwrap();
//! let date: BookingDate = "2024-06-01".parse().unwrap();
//! for room in Database::find_available_rooms(db.connection(), hotel, date).unwrap() {
//!     println!("room {} at {}", room.room_number, room.price);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod queries;
mod schema;
mod transaction;
mod values;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DATA_DIR_ENV, DEFAULT_BUSY_TIMEOUT,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
