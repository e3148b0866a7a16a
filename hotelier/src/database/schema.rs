//! Database schema definitions and SQL constants.
//!
//! This module contains all table definitions, indices, and the SQL
//! statements shared by the repository functions.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Users of both roles. `credential_hash` holds a PHC string.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        user_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        credential_hash TEXT NOT NULL,
        role TEXT NOT NULL CHECK (role IN ('customer', 'manager'))
    )";

/// Hotels, each administered by exactly one manager.
pub const CREATE_HOTELS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS hotels (
        hotel_id INTEGER PRIMARY KEY AUTOINCREMENT,
        manager_id INTEGER NOT NULL REFERENCES users(user_id),
        name TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    )";

/// Rooms, keyed by (hotel, room number).
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        hotel_id INTEGER NOT NULL REFERENCES hotels(hotel_id),
        room_number INTEGER NOT NULL,
        price REAL NOT NULL CHECK (price >= 0),
        image_url TEXT NOT NULL,
        PRIMARY KEY (hotel_id, room_number)
    )";

/// Maintenance companies that carry out repairs.
pub const CREATE_COMPANIES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS maintenance_companies (
        company_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )";

/// Bookings. The UNIQUE constraint backs up the availability check made
/// inside the booking transaction.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS room_bookings (
        booking_id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id INTEGER NOT NULL REFERENCES users(user_id),
        hotel_id INTEGER NOT NULL,
        room_number INTEGER NOT NULL,
        booking_date TEXT NOT NULL,
        UNIQUE (hotel_id, room_number, booking_date),
        FOREIGN KEY (hotel_id, room_number) REFERENCES rooms(hotel_id, room_number)
    )";

/// Append-only audit of room updates.
pub const CREATE_UPDATE_LOGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS room_update_logs (
        update_id INTEGER PRIMARY KEY AUTOINCREMENT,
        manager_id INTEGER NOT NULL REFERENCES users(user_id),
        hotel_id INTEGER NOT NULL,
        room_number INTEGER NOT NULL,
        updated_on INTEGER NOT NULL,
        FOREIGN KEY (hotel_id, room_number) REFERENCES rooms(hotel_id, room_number)
    )";

/// Append-only repair schedule.
pub const CREATE_REPAIRS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS room_repairs (
        repair_id INTEGER PRIMARY KEY AUTOINCREMENT,
        company_id INTEGER NOT NULL REFERENCES maintenance_companies(company_id),
        hotel_id INTEGER NOT NULL,
        room_number INTEGER NOT NULL,
        repair_date TEXT NOT NULL,
        FOREIGN KEY (hotel_id, room_number) REFERENCES rooms(hotel_id, room_number)
    )";

/// Links each repair to the manager who requested it.
pub const CREATE_REPAIR_REQUESTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS room_repair_requests (
        request_id INTEGER PRIMARY KEY AUTOINCREMENT,
        manager_id INTEGER NOT NULL REFERENCES users(user_id),
        repair_id INTEGER NOT NULL UNIQUE REFERENCES room_repairs(repair_id)
    )";

/// Indices supporting the read queries.
pub const CREATE_INDICES: [&str; 5] = [
    "CREATE INDEX IF NOT EXISTS idx_hotels_manager ON hotels(manager_id)",
    "CREATE INDEX IF NOT EXISTS idx_bookings_customer ON room_bookings(customer_id, booking_date)",
    "CREATE INDEX IF NOT EXISTS idx_bookings_hotel_date ON room_bookings(hotel_id, booking_date)",
    "CREATE INDEX IF NOT EXISTS idx_update_logs_hotel ON room_update_logs(hotel_id)",
    "CREATE INDEX IF NOT EXISTS idx_repair_requests_manager ON room_repair_requests(manager_id)",
];

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

pub const INSERT_USER: &str =
    "INSERT INTO users (name, credential_hash, role) VALUES (?1, ?2, ?3)";

pub const SELECT_USER: &str =
    "SELECT user_id, name, credential_hash, role FROM users WHERE user_id = ?1";

pub const UPDATE_USER_CREDENTIAL: &str =
    "UPDATE users SET credential_hash = ?2 WHERE user_id = ?1";

pub const INSERT_HOTEL: &str =
    "INSERT INTO hotels (manager_id, name, latitude, longitude) VALUES (?1, ?2, ?3, ?4)";

pub const SELECT_HOTEL: &str =
    "SELECT hotel_id, manager_id, name, latitude, longitude FROM hotels WHERE hotel_id = ?1";

pub const SELECT_ALL_HOTELS: &str =
    "SELECT hotel_id, manager_id, name, latitude, longitude FROM hotels ORDER BY hotel_id";

pub const SELECT_MANAGED_HOTEL_IDS: &str =
    "SELECT hotel_id FROM hotels WHERE manager_id = ?1 ORDER BY hotel_id";

pub const INSERT_ROOM: &str =
    "INSERT INTO rooms (hotel_id, room_number, price, image_url) VALUES (?1, ?2, ?3, ?4)";

pub const SELECT_ROOM: &str = r"
    SELECT hotel_id, room_number, price, image_url
    FROM rooms
    WHERE hotel_id = ?1 AND room_number = ?2
";

pub const UPDATE_ROOM: &str = r"
    UPDATE rooms SET price = ?3, image_url = ?4
    WHERE hotel_id = ?1 AND room_number = ?2
";

pub const SELECT_AVAILABLE_ROOMS: &str = r"
    SELECT r.hotel_id, r.room_number, r.price, r.image_url
    FROM rooms r
    WHERE r.hotel_id = ?1
      AND NOT EXISTS (
          SELECT 1 FROM room_bookings b
          WHERE b.hotel_id = r.hotel_id
            AND b.room_number = r.room_number
            AND b.booking_date = ?2
      )
    ORDER BY r.room_number
";

pub const INSERT_COMPANY: &str = "INSERT INTO maintenance_companies (name) VALUES (?1)";

pub const COMPANY_EXISTS: &str =
    "SELECT EXISTS(SELECT 1 FROM maintenance_companies WHERE company_id = ?1)";

pub const INSERT_BOOKING: &str = r"
    INSERT INTO room_bookings (customer_id, hotel_id, room_number, booking_date)
    VALUES (?1, ?2, ?3, ?4)
";

pub const BOOKING_EXISTS: &str = r"
    SELECT EXISTS(
        SELECT 1 FROM room_bookings
        WHERE hotel_id = ?1 AND room_number = ?2 AND booking_date = ?3
    )
";

pub const SELECT_BOOKING: &str = r"
    SELECT booking_id, customer_id, hotel_id, room_number, booking_date
    FROM room_bookings
    WHERE booking_id = ?1
";

pub const INSERT_UPDATE_LOG: &str = r"
    INSERT INTO room_update_logs (manager_id, hotel_id, room_number, updated_on)
    VALUES (?1, ?2, ?3, ?4)
";

pub const SELECT_UPDATE_LOGS_FOR_ROOM: &str = r"
    SELECT update_id, manager_id, hotel_id, room_number, updated_on
    FROM room_update_logs
    WHERE hotel_id = ?1 AND room_number = ?2
    ORDER BY update_id
";

pub const INSERT_REPAIR: &str = r"
    INSERT INTO room_repairs (company_id, hotel_id, room_number, repair_date)
    VALUES (?1, ?2, ?3, ?4)
";

pub const INSERT_REPAIR_REQUEST: &str =
    "INSERT INTO room_repair_requests (manager_id, repair_id) VALUES (?1, ?2)";

pub const SELECT_RECENT_BOOKINGS: &str = r"
    SELECT b.booking_id, u.name, b.hotel_id, b.room_number, r.price, b.booking_date
    FROM room_bookings b
    JOIN users u ON u.user_id = b.customer_id
    JOIN rooms r ON r.hotel_id = b.hotel_id AND r.room_number = b.room_number
    WHERE b.customer_id = ?1
    ORDER BY b.booking_date DESC, b.booking_id DESC
    LIMIT ?2
";

pub const SELECT_RECENT_UPDATES_ALL: &str = r"
    SELECT update_id, manager_id, hotel_id, room_number, updated_on
    FROM room_update_logs
    ORDER BY update_id DESC
    LIMIT ?1
";

pub const SELECT_RECENT_UPDATES_MANAGED: &str = r"
    SELECT l.update_id, l.manager_id, l.hotel_id, l.room_number, l.updated_on
    FROM room_update_logs l
    JOIN hotels h ON h.hotel_id = l.hotel_id
    WHERE h.manager_id = ?1
    ORDER BY l.update_id DESC
    LIMIT ?2
";

pub const SELECT_BOOKING_HISTORY: &str = r"
    SELECT b.booking_id, u.name, b.hotel_id, b.room_number, r.price, b.booking_date
    FROM room_bookings b
    JOIN hotels h ON h.hotel_id = b.hotel_id
    JOIN users u ON u.user_id = b.customer_id
    JOIN rooms r ON r.hotel_id = b.hotel_id AND r.room_number = b.room_number
    WHERE h.manager_id = ?1
      AND (?2 IS NULL OR b.booking_date >= ?2)
      AND (?3 IS NULL OR b.booking_date <= ?3)
    ORDER BY b.booking_date DESC, b.booking_id DESC
";

pub const SELECT_REGULAR_CUSTOMERS: &str = r"
    SELECT u.user_id, u.name, COUNT(*) AS total
    FROM room_bookings b
    JOIN users u ON u.user_id = b.customer_id
    WHERE b.hotel_id = ?1
    GROUP BY u.user_id, u.name
    ORDER BY total DESC, u.name ASC, u.user_id ASC
    LIMIT ?2
";

pub const SELECT_REPAIR_HISTORY: &str = r"
    SELECT q.request_id, p.repair_id, p.company_id, p.hotel_id, p.room_number, p.repair_date
    FROM room_repair_requests q
    JOIN room_repairs p ON p.repair_id = q.repair_id
    WHERE q.manager_id = ?1
    ORDER BY p.repair_date DESC, p.repair_id DESC
";
