//! Common test utilities for integration tests.
//!
//! Fixtures go through the public API, except where a test needs a user
//! with a fixed id.

use std::path::{Path, PathBuf};
use std::time::Duration;

use hotelier::database::{Database, DatabaseConfig};
use hotelier::gate::DatabaseGate;
use hotelier::{GeoPoint, HotelId, NewHotel, Price, Role, Room, RoomNumber, UserId};

/// Credential used for every fixture user.
#[allow(dead_code)]
pub const PASSWORD: &str = "correct horse";

/// Creates a database file in a temporary directory and returns its path.
///
/// The directory is leaked so that several handles can be opened on the
/// same file for the length of the test.
#[allow(dead_code)]
pub fn create_test_database_path() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hotelier.db");
    std::mem::forget(dir);
    path
}

/// Opens a handle on `path` with a generous busy timeout.
#[allow(dead_code)]
pub fn open(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path).with_busy_timeout(Duration::from_secs(30))).unwrap()
}

/// Creates a fresh database in a temporary location.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    open(&create_test_database_path())
}

/// Registers a user through the gate.
#[allow(dead_code)]
pub fn register(db: &mut Database, name: &str, role: Role) -> UserId {
    DatabaseGate::new().register(db, name, PASSWORD, role).unwrap()
}

/// Inserts a user with a fixed id, bypassing the autoincrement.
#[allow(dead_code)]
pub fn insert_user_with_id(db: &Database, id: i64, name: &str, role: Role) -> UserId {
    db.connection()
        .execute(
            "INSERT INTO users (user_id, name, credential_hash, role) VALUES (?1, ?2, 'x', ?3)",
            rusqlite::params![id, name, role.as_str()],
        )
        .unwrap();
    UserId::try_from(id).unwrap()
}

/// Creates a hotel for `manager` at the given coordinates.
#[allow(dead_code)]
pub fn add_hotel(db: &mut Database, manager: UserId, latitude: f64, longitude: f64) -> HotelId {
    db.create_hotel(&NewHotel {
        manager_id: manager,
        name: format!("Hotel at {latitude},{longitude}"),
        location: GeoPoint::new(latitude, longitude).unwrap(),
    })
    .unwrap()
}

/// Creates a room with the given number and price.
#[allow(dead_code)]
pub fn add_room(db: &mut Database, hotel: HotelId, number: i64, price: f64) -> RoomNumber {
    let room_number = RoomNumber::try_from(number).unwrap();
    db.create_room(&Room {
        hotel_id: hotel,
        room_number,
        price: Price::try_from(price).unwrap(),
        image_url: format!("https://img.example/{number}.jpg"),
    })
    .unwrap();
    room_number
}

/// Counts the rows of a table.
#[allow(dead_code)]
pub fn count_rows(db: &Database, table: &str) -> i64 {
    db.connection()
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}
