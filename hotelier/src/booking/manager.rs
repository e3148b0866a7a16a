use std::time::SystemTime;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::gate::{RoleGate, RoleGateExt};
use crate::model::{
    BookingDate, CompanyId, HotelId, Price, RepairId, RoomNumber, RoomUpdateLog, UserId,
};

use super::BookingOutcome;

/// Runs every state-changing operation on rooms.
///
/// Each operation is one IMMEDIATE transaction that authorizes, validates,
/// checks its invariant and then writes the mutation together with its
/// audit row. Nothing is written unless every step succeeds.
///
/// # Examples
///
/// ```no_run
/// use hotelier::database::{Database, DatabaseConfig};
/// use hotelier::gate::DatabaseGate;
/// use hotelier::{BookingManager, BookingOutcome, HotelId, RoomNumber, UserId};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/hotelier.db")).unwrap();
/// let gate = DatabaseGate::new();
/// let mut manager = BookingManager::new(&mut db, &gate);
///
/// let outcome = manager
///     .book_room(
///         UserId::try_from(42).unwrap(),
///         HotelId::try_from(1).unwrap(),
///         RoomNumber::try_from(101).unwrap(),
///         "2024-06-01".parse().unwrap(),
///     )
///     .unwrap();
/// match outcome {
///     BookingOutcome::Booked(id) => println!("booking {id}"),
///     BookingOutcome::Unavailable => println!("already taken"),
/// }
/// ```
pub struct BookingManager<'a, G: RoleGate> {
    db: &'a mut Database,
    gate: &'a G,
}

impl<'a, G: RoleGate> BookingManager<'a, G> {
    /// Creates a manager working on `db`, authorizing through `gate`.
    pub fn new(db: &'a mut Database, gate: &'a G) -> Self {
        Self { db, gate }
    }

    /// Books a room for a single date.
    ///
    /// Availability is re-checked under the write lock, so of two
    /// concurrent attempts on the same room and date exactly one is booked.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `NotAuthorized` if `customer` is not a known user
    /// - `NotFound` if the room does not exist
    /// - `StoreUnavailable` if the write lock could not be acquired in time
    pub fn book_room(
        &mut self,
        customer: UserId,
        hotel: HotelId,
        room: RoomNumber,
        date: BookingDate,
    ) -> Result<BookingOutcome> {
        let gate = self.gate;
        let outcome = self.db.immediate(|tx| {
            gate.require_user(tx, customer, "book a room")?;

            if Database::get_room(tx, hotel, room)?.is_none() {
                return Err(Error::not_found(format!("room {room} of hotel {hotel}")));
            }
            if Database::is_room_booked(tx, hotel, room, date)? {
                return Ok(BookingOutcome::Unavailable);
            }

            match Database::create_booking_simple(tx, customer, hotel, room, date) {
                Ok(id) => Ok(BookingOutcome::Booked(id)),
                Err(Error::ConstraintViolation { .. }) => Ok(BookingOutcome::Unavailable),
                Err(e) => Err(e),
            }
        })?;

        match outcome {
            BookingOutcome::Booked(id) => {
                log::info!("booking {id}: hotel {hotel} room {room} on {date} for user {customer}");
            }
            BookingOutcome::Unavailable => {
                log::debug!("hotel {hotel} room {room} is already booked on {date}");
            }
        }
        Ok(outcome)
    }

    /// Updates price and image of a room and records the update.
    ///
    /// Exactly one update log row is appended per successful call.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `NotAuthorized` if `manager` does not administer `hotel`
    /// - `NotFound` if the room does not exist
    pub fn update_room_info(
        &mut self,
        manager: UserId,
        hotel: HotelId,
        room: RoomNumber,
        new_price: Price,
        new_image_url: &str,
    ) -> Result<RoomUpdateLog> {
        let gate = self.gate;
        let log_row = self.db.immediate(|tx| {
            let action = format!("update room {room} of hotel {hotel}");
            gate.require_hotel_manager(tx, manager, hotel, &action)?;

            if !Database::update_room_simple(tx, hotel, room, new_price, new_image_url)? {
                return Err(Error::not_found(format!("room {room} of hotel {hotel}")));
            }
            Database::append_update_log_simple(tx, manager, hotel, room, SystemTime::now())
        })?;

        log::info!(
            "update {}: manager {manager} set hotel {hotel} room {room} to {new_price}",
            log_row.id
        );
        Ok(log_row)
    }

    /// Schedules a repair with a maintenance company and records who
    /// requested it.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `NotAuthorized` if `manager` does not administer `hotel`
    /// - `NotFound` if the room or the company does not exist
    pub fn file_repair_request(
        &mut self,
        manager: UserId,
        hotel: HotelId,
        room: RoomNumber,
        company: CompanyId,
        date: BookingDate,
    ) -> Result<RepairId> {
        let gate = self.gate;
        let repair = self.db.immediate(|tx| {
            let action = format!("request repair of room {room} of hotel {hotel}");
            gate.require_hotel_manager(tx, manager, hotel, &action)?;

            if Database::get_room(tx, hotel, room)?.is_none() {
                return Err(Error::not_found(format!("room {room} of hotel {hotel}")));
            }
            if !Database::company_exists(tx, company)? {
                return Err(Error::not_found(format!("maintenance company {company}")));
            }

            let repair = Database::create_repair_simple(tx, company, hotel, room, date)?;
            Database::create_repair_request_simple(tx, manager, repair)?;
            Ok(repair)
        })?;

        log::info!("repair {repair}: company {company} for hotel {hotel} room {room} on {date}");
        Ok(repair)
    }
}
