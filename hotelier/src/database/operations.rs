//! Typed CRUD operations for users, hotels, rooms, companies, bookings and
//! audit rows.
//!
//! Each write comes as a `*_simple` associated function taking a
//! `&Connection`, usable inside a transaction that is already open, and
//! where it is useful on its own, a `&mut self` method that wraps the same
//! statement in an IMMEDIATE transaction.

use std::collections::BTreeSet;
use std::time::SystemTime;

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::geo::{within_radius, GeoPoint, DEFAULT_SEARCH_RADIUS};
use crate::model::{
    BookingDate, BookingId, CompanyId, Hotel, HotelId, NewHotel, Price, RepairId, RequestId,
    Role, Room, RoomBooking, RoomNumber, RoomUpdateLog, UpdateId, User, UserId,
};

use super::connection::Database;
use super::schema::{
    BOOKING_EXISTS, COMPANY_EXISTS, INSERT_BOOKING, INSERT_COMPANY, INSERT_HOTEL,
    INSERT_REPAIR, INSERT_REPAIR_REQUEST, INSERT_ROOM, INSERT_UPDATE_LOG, INSERT_USER,
    SELECT_ALL_HOTELS, SELECT_AVAILABLE_ROOMS, SELECT_BOOKING, SELECT_HOTEL,
    SELECT_MANAGED_HOTEL_IDS, SELECT_ROOM, SELECT_UPDATE_LOGS_FOR_ROOM, SELECT_USER,
    UPDATE_ROOM, UPDATE_USER_CREDENTIAL,
};
use super::values::{systemtime_to_unix_secs, unix_secs_to_systemtime};

/// Expects: `hotel_id`, `manager_id`, name, latitude, longitude.
pub(super) fn row_to_hotel(row: &Row<'_>) -> rusqlite::Result<Hotel> {
    Ok(Hotel {
        id: row.get(0)?,
        manager_id: row.get(1)?,
        name: row.get(2)?,
        latitude: row.get(3)?,
        longitude: row.get(4)?,
    })
}

/// Expects: `hotel_id`, `room_number`, price, `image_url`.
pub(super) fn row_to_room(row: &Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        hotel_id: row.get(0)?,
        room_number: row.get(1)?,
        price: row.get(2)?,
        image_url: row.get(3)?,
    })
}

/// Expects: `update_id`, `manager_id`, `hotel_id`, `room_number`, `updated_on`.
pub(super) fn row_to_update_log(row: &Row<'_>) -> rusqlite::Result<RoomUpdateLog> {
    Ok(RoomUpdateLog {
        id: row.get(0)?,
        manager_id: row.get(1)?,
        hotel_id: row.get(2)?,
        room_number: row.get(3)?,
        updated_on: unix_secs_to_systemtime(row.get(4)?),
    })
}

fn require_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput {
            field: field.to_string(),
            message: "must not be empty".into(),
        });
    }
    Ok(())
}

impl Database {
    /// Inserts a user and returns the generated id.
    ///
    /// `credential_hash` must already be hashed; plaintext credentials never
    /// reach the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the insert fails.
    pub fn create_user_simple(
        conn: &Connection,
        name: &str,
        credential_hash: &str,
        role: Role,
    ) -> Result<UserId> {
        require_name("name", name)?;
        conn.execute(INSERT_USER, params![name.trim(), credential_hash, role])?;
        Ok(UserId::try_from(conn.last_insert_rowid())?)
    }

    /// Inserts a user in its own transaction.
    ///
    /// # Errors
    ///
    /// See [`Database::create_user_simple`].
    pub fn create_user(&mut self, name: &str, credential_hash: &str, role: Role) -> Result<UserId> {
        self.immediate(|tx| Self::create_user_simple(tx, name, credential_hash, role))
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user(conn: &Connection, id: UserId) -> Result<Option<User>> {
        conn.query_row(SELECT_USER, [id], |row| {
            Ok(User {
                id: row.get(0)?,
                name: row.get(1)?,
                credential_hash: row.get(2)?,
                role: row.get(3)?,
            })
        })
        .optional()
        .map_err(Error::from)
    }

    /// Replaces the stored credential hash of a user.
    ///
    /// Returns `false` if no such user exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_credential_simple(
        conn: &Connection,
        id: UserId,
        credential_hash: &str,
    ) -> Result<bool> {
        let changed = conn.execute(UPDATE_USER_CREDENTIAL, params![id, credential_hash])?;
        Ok(changed > 0)
    }

    /// Inserts a hotel and returns the generated id.
    ///
    /// The hotel's manager must be an existing user with the manager role.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `NotFound` if the manager does not exist
    /// - `InvalidInput` if the user is not a manager or the name is empty
    pub fn create_hotel_simple(conn: &Connection, hotel: &NewHotel) -> Result<HotelId> {
        require_name("hotel name", &hotel.name)?;
        match Self::get_user(conn, hotel.manager_id)? {
            None => return Err(Error::not_found(format!("user {}", hotel.manager_id))),
            Some(user) if user.role != Role::Manager => {
                return Err(Error::InvalidInput {
                    field: "manager_id".into(),
                    message: format!("user {} is not a manager", hotel.manager_id),
                });
            }
            Some(_) => {}
        }

        conn.execute(
            INSERT_HOTEL,
            params![
                hotel.manager_id,
                hotel.name.trim(),
                hotel.location.latitude(),
                hotel.location.longitude()
            ],
        )?;
        Ok(HotelId::try_from(conn.last_insert_rowid())?)
    }

    /// Inserts a hotel in its own transaction.
    ///
    /// # Errors
    ///
    /// See [`Database::create_hotel_simple`].
    pub fn create_hotel(&mut self, hotel: &NewHotel) -> Result<HotelId> {
        self.immediate(|tx| Self::create_hotel_simple(tx, hotel))
    }

    /// Looks up a hotel by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_hotel(conn: &Connection, id: HotelId) -> Result<Option<Hotel>> {
        conn.query_row(SELECT_HOTEL, [id], row_to_hotel)
            .optional()
            .map_err(Error::from)
    }

    /// Lists every hotel ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_hotels(conn: &Connection) -> Result<Vec<Hotel>> {
        let mut stmt = conn.prepare(SELECT_ALL_HOTELS)?;
        let hotels = stmt
            .query_map([], row_to_hotel)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(hotels)
    }

    /// Returns the ids of the hotels a user administers.
    ///
    /// The set is empty for customers and unknown users.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn managed_hotel_ids(conn: &Connection, manager: UserId) -> Result<BTreeSet<HotelId>> {
        let mut stmt = conn.prepare(SELECT_MANAGED_HOTEL_IDS)?;
        let ids = stmt
            .query_map([manager], |row| row.get(0))?
            .collect::<rusqlite::Result<BTreeSet<HotelId>>>()?;
        Ok(ids)
    }

    /// Returns hotels strictly closer than `max_distance` to `point`.
    ///
    /// Results are ordered by distance, then by hotel id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `max_distance` is negative or not finite,
    /// or an error if the query fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hotelier::database::{Database, DatabaseConfig};
    /// use hotelier::GeoPoint;
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/hotelier.db")).unwrap();
    /// let here = GeoPoint::new(40.7, -74.0).unwrap();
    /// let hotels = Database::find_hotels_within_radius(db.connection(), here, 10.0).unwrap();
    /// ```
    pub fn find_hotels_within_radius(
        conn: &Connection,
        point: GeoPoint,
        max_distance: f64,
    ) -> Result<Vec<Hotel>> {
        if !max_distance.is_finite() || max_distance < 0.0 {
            return Err(Error::InvalidInput {
                field: "radius".into(),
                message: format!("{max_distance} is not a valid distance"),
            });
        }

        let mut hotels: Vec<(f64, Hotel)> = Self::list_hotels(conn)?
            .into_iter()
            .filter(|hotel| within_radius(point, hotel.location(), max_distance))
            .map(|hotel| (point.distance_to(hotel.location()), hotel))
            .collect();
        hotels.sort_by(|(a, ha), (b, hb)| a.total_cmp(b).then(ha.id.cmp(&hb.id)));
        Ok(hotels.into_iter().map(|(_, hotel)| hotel).collect())
    }

    /// Returns hotels within [`DEFAULT_SEARCH_RADIUS`] of `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_hotels_nearby(conn: &Connection, point: GeoPoint) -> Result<Vec<Hotel>> {
        Self::find_hotels_within_radius(conn, point, DEFAULT_SEARCH_RADIUS)
    }

    /// Inserts a room.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `ConstraintViolation` if the hotel already has a room with that number
    /// - `NotFound` if the hotel does not exist
    pub fn create_room_simple(conn: &Connection, room: &Room) -> Result<()> {
        if Self::get_hotel(conn, room.hotel_id)?.is_none() {
            return Err(Error::not_found(format!("hotel {}", room.hotel_id)));
        }
        conn.execute(
            INSERT_ROOM,
            params![room.hotel_id, room.room_number, room.price, room.image_url],
        )?;
        Ok(())
    }

    /// Inserts a room in its own transaction.
    ///
    /// # Errors
    ///
    /// See [`Database::create_room_simple`].
    pub fn create_room(&mut self, room: &Room) -> Result<()> {
        self.immediate(|tx| Self::create_room_simple(tx, room))
    }

    /// Looks up a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_room(conn: &Connection, hotel: HotelId, room: RoomNumber) -> Result<Option<Room>> {
        conn.query_row(SELECT_ROOM, params![hotel, room], row_to_room)
            .optional()
            .map_err(Error::from)
    }

    /// Overwrites price and image of a room.
    ///
    /// Returns `false` if the room does not exist. Callers that need an
    /// audit row use the booking manager instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_room_simple(
        conn: &Connection,
        hotel: HotelId,
        room: RoomNumber,
        price: Price,
        image_url: &str,
    ) -> Result<bool> {
        let changed = conn.execute(UPDATE_ROOM, params![hotel, room, price, image_url])?;
        Ok(changed > 0)
    }

    /// Rooms of `hotel` with no booking on `date`, ordered by room number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_available_rooms(
        conn: &Connection,
        hotel: HotelId,
        date: BookingDate,
    ) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(SELECT_AVAILABLE_ROOMS)?;
        let rooms = stmt
            .query_map(params![hotel, date], row_to_room)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }

    /// Inserts a maintenance company and returns the generated id.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the insert fails.
    pub fn create_company_simple(conn: &Connection, name: &str) -> Result<CompanyId> {
        require_name("company name", name)?;
        conn.execute(INSERT_COMPANY, [name.trim()])?;
        Ok(CompanyId::try_from(conn.last_insert_rowid())?)
    }

    /// Inserts a maintenance company in its own transaction.
    ///
    /// # Errors
    ///
    /// See [`Database::create_company_simple`].
    pub fn create_company(&mut self, name: &str) -> Result<CompanyId> {
        self.immediate(|tx| Self::create_company_simple(tx, name))
    }

    /// Checks whether a maintenance company exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn company_exists(conn: &Connection, id: CompanyId) -> Result<bool> {
        Ok(conn.query_row(COMPANY_EXISTS, [id], |row| row.get(0))?)
    }

    /// Checks whether a room is booked on a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn is_room_booked(
        conn: &Connection,
        hotel: HotelId,
        room: RoomNumber,
        date: BookingDate,
    ) -> Result<bool> {
        Ok(conn.query_row(BOOKING_EXISTS, params![hotel, room, date], |row| row.get(0))?)
    }

    /// Inserts a booking and returns the generated id.
    ///
    /// This does not check availability itself; the UNIQUE constraint turns
    /// a double booking into `ConstraintViolation`.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `ConstraintViolation` if the room is already booked on that date
    /// - `NotFound` if the customer or room does not exist
    pub fn create_booking_simple(
        conn: &Connection,
        customer: UserId,
        hotel: HotelId,
        room: RoomNumber,
        date: BookingDate,
    ) -> Result<BookingId> {
        conn.execute(INSERT_BOOKING, params![customer, hotel, room, date])?;
        Ok(BookingId::try_from(conn.last_insert_rowid())?)
    }

    /// Looks up a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking(conn: &Connection, id: BookingId) -> Result<Option<RoomBooking>> {
        conn.query_row(SELECT_BOOKING, [id], |row| {
            Ok(RoomBooking {
                id: row.get(0)?,
                customer_id: row.get(1)?,
                hotel_id: row.get(2)?,
                room_number: row.get(3)?,
                booking_date: row.get(4)?,
            })
        })
        .optional()
        .map_err(Error::from)
    }

    /// Appends a room update audit row and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn append_update_log_simple(
        conn: &Connection,
        manager: UserId,
        hotel: HotelId,
        room: RoomNumber,
        updated_on: SystemTime,
    ) -> Result<RoomUpdateLog> {
        let secs = systemtime_to_unix_secs(updated_on);
        conn.execute(INSERT_UPDATE_LOG, params![manager, hotel, room, secs])?;
        Ok(RoomUpdateLog {
            id: UpdateId::try_from(conn.last_insert_rowid())?,
            manager_id: manager,
            hotel_id: hotel,
            room_number: room,
            updated_on: unix_secs_to_systemtime(secs),
        })
    }

    /// Lists the update log of a room, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_update_logs_for_room(
        conn: &Connection,
        hotel: HotelId,
        room: RoomNumber,
    ) -> Result<Vec<RoomUpdateLog>> {
        let mut stmt = conn.prepare(SELECT_UPDATE_LOGS_FOR_ROOM)?;
        let logs = stmt
            .query_map(params![hotel, room], row_to_update_log)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(logs)
    }

    /// Inserts a repair and returns the generated id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the company or room does not exist.
    pub fn create_repair_simple(
        conn: &Connection,
        company: CompanyId,
        hotel: HotelId,
        room: RoomNumber,
        repair_date: BookingDate,
    ) -> Result<RepairId> {
        conn.execute(INSERT_REPAIR, params![company, hotel, room, repair_date])?;
        Ok(RepairId::try_from(conn.last_insert_rowid())?)
    }

    /// Links a repair to the manager who requested it.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if the repair already has a request.
    pub fn create_repair_request_simple(
        conn: &Connection,
        manager: UserId,
        repair: RepairId,
    ) -> Result<RequestId> {
        conn.execute(INSERT_REPAIR_REQUEST, params![manager, repair])?;
        Ok(RequestId::try_from(conn.last_insert_rowid())?)
    }
}
