use crate::database::Database;
use crate::error::{Error, Result};
use crate::gate::{RoleGate, RoleGateExt};
use crate::geo::GeoPoint;
use crate::model::{
    BookingDate, BookingRecord, DateRange, Hotel, HotelId, RegularCustomer, RepairRecord, Room,
    RoomUpdateLog, UpdateScope, UserId,
};

fn check_limit(limit: u32) -> Result<u32> {
    if limit == 0 {
        return Err(Error::InvalidInput {
            field: "limit".into(),
            message: "must be at least 1".into(),
        });
    }
    Ok(limit)
}

/// Read-only facade over the store.
///
/// Listings that expose other people's data are authorized through the
/// gate first. Nothing here writes.
///
/// # Examples
///
/// ```no_run
/// use hotelier::database::{Database, DatabaseConfig};
/// use hotelier::gate::DatabaseGate;
/// use hotelier::{QueryService, UserId, DEFAULT_RECENT_LIMIT};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/hotelier.db")).unwrap();
/// let gate = DatabaseGate::new();
/// let queries = QueryService::new(&db, &gate);
///
/// let customer = UserId::try_from(42).unwrap();
/// for record in queries.recent_bookings(customer, DEFAULT_RECENT_LIMIT).unwrap() {
///     println!("{} room {} on {}", record.hotel_id, record.room_number, record.booking_date);
/// }
/// ```
pub struct QueryService<'a, G: RoleGate> {
    db: &'a Database,
    gate: &'a G,
}

impl<'a, G: RoleGate> QueryService<'a, G> {
    /// Creates a query service reading from `db`.
    pub fn new(db: &'a Database, gate: &'a G) -> Self {
        Self { db, gate }
    }

    /// Most recent bookings of a customer, newest booking date first.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` for an unknown user and `InvalidInput` for a
    /// zero limit.
    pub fn recent_bookings(&self, customer: UserId, limit: u32) -> Result<Vec<BookingRecord>> {
        let limit = check_limit(limit)?;
        let conn = self.db.connection();
        self.gate.require_user(conn, customer, "list bookings")?;
        Database::recent_bookings(conn, customer, limit)
    }

    /// Most recent room updates, newest first.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` unless `manager` is a manager, in either scope.
    pub fn recent_room_updates(
        &self,
        manager: UserId,
        scope: UpdateScope,
        limit: u32,
    ) -> Result<Vec<RoomUpdateLog>> {
        let limit = check_limit(limit)?;
        let conn = self.db.connection();
        self.gate.require_manager(conn, manager, "list room updates")?;
        let managed_by = match scope {
            UpdateScope::OwnHotels => Some(manager),
            UpdateScope::All => None,
        };
        Database::recent_room_updates(conn, managed_by, limit)
    }

    /// Bookings of every hotel the manager administers, optionally limited
    /// to an inclusive date range, newest first.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` unless `manager` is a manager.
    pub fn booking_history(
        &self,
        manager: UserId,
        range: Option<DateRange>,
    ) -> Result<Vec<BookingRecord>> {
        let conn = self.db.connection();
        self.gate.require_manager(conn, manager, "view booking history")?;
        Database::booking_history(conn, manager, range)
    }

    /// Customers with the most bookings at a hotel, most bookings first
    /// and ties broken by name.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` unless `manager` administers `hotel`.
    pub fn regular_customers(
        &self,
        manager: UserId,
        hotel: HotelId,
        limit: u32,
    ) -> Result<Vec<RegularCustomer>> {
        let limit = check_limit(limit)?;
        let conn = self.db.connection();
        self.gate.require_hotel_manager(
            conn,
            manager,
            hotel,
            &format!("list regular customers of hotel {hotel}"),
        )?;
        Database::regular_customers(conn, hotel, limit)
    }

    /// Repairs requested by the manager, newest repair date first.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` unless `manager` is a manager.
    pub fn repair_history(&self, manager: UserId) -> Result<Vec<RepairRecord>> {
        let conn = self.db.connection();
        self.gate.require_manager(conn, manager, "view repair history")?;
        Database::repair_history(conn, manager)
    }

    /// Hotels strictly within `radius` of `point`, nearest first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative or non-finite radius.
    pub fn hotels_nearby(&self, point: GeoPoint, radius: f64) -> Result<Vec<Hotel>> {
        Database::find_hotels_within_radius(self.db.connection(), point, radius)
    }

    /// Rooms of a hotel that are free on `date`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the hotel does not exist.
    pub fn available_rooms(&self, hotel: HotelId, date: BookingDate) -> Result<Vec<Room>> {
        let conn = self.db.connection();
        if Database::get_hotel(conn, hotel)?.is_none() {
            return Err(Error::not_found(format!("hotel {hotel}")));
        }
        Database::find_available_rooms(conn, hotel, date)
    }
}
