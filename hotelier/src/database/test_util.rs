//! Shared test utilities for database unit tests.
//!
//! Seeding helpers store a placeholder credential hash so that tests which
//! never authenticate don't pay for Argon2.

use std::path::PathBuf;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::geo::GeoPoint;
use crate::model::{BookingDate, HotelId, NewHotel, Price, Role, Room, RoomNumber, UserId};

/// Placeholder hash used by the seeding helpers.
pub const TEST_HASH: &str = "$test$not-a-real-hash";

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let (db, _path) = create_test_database_with_path();
    db
}

/// Creates a temporary test database and returns its path as well, so that
/// further handles can be opened on the same file.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database_with_path() -> (Database, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(&path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    (db, path)
}

/// Inserts a manager.
pub fn seed_manager(db: &mut Database, name: &str) -> UserId {
    db.create_user(name, TEST_HASH, Role::Manager).unwrap()
}

/// Inserts a customer.
pub fn seed_customer(db: &mut Database, name: &str) -> UserId {
    db.create_user(name, TEST_HASH, Role::Customer).unwrap()
}

/// Inserts a hotel managed by `manager` at the given location.
pub fn seed_hotel(db: &mut Database, manager: UserId, latitude: f64, longitude: f64) -> HotelId {
    db.create_hotel(&NewHotel {
        manager_id: manager,
        name: format!("Hotel at {latitude},{longitude}"),
        location: GeoPoint::new(latitude, longitude).unwrap(),
    })
    .unwrap()
}

/// Inserts a room.
pub fn seed_room(db: &mut Database, hotel: HotelId, number: i64, price: f64) -> RoomNumber {
    let room_number = RoomNumber::try_from(number).unwrap();
    db.create_room(&Room {
        hotel_id: hotel,
        room_number,
        price: Price::try_from(price).unwrap(),
        image_url: format!("https://img.example/{number}.png"),
    })
    .unwrap();
    room_number
}

/// Shorthand for a valid calendar date.
pub fn date(year: i32, month: u32, day: u32) -> BookingDate {
    BookingDate::from_ymd(year, month, day).unwrap()
}
