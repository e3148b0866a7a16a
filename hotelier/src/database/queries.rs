//! Read-only aggregate queries.
//!
//! These return joined projections rather than raw rows. They do no
//! authorization; the query service decides who may run them.

use rusqlite::{params, Connection, Row};

use crate::error::Result;
use crate::model::{
    BookingRecord, DateRange, HotelId, RegularCustomer, RepairRecord, RoomRepair, RoomUpdateLog,
    UserId,
};

use super::connection::Database;
use super::operations::row_to_update_log;
use super::schema::{
    SELECT_BOOKING_HISTORY, SELECT_RECENT_BOOKINGS, SELECT_RECENT_UPDATES_ALL,
    SELECT_RECENT_UPDATES_MANAGED, SELECT_REGULAR_CUSTOMERS, SELECT_REPAIR_HISTORY,
};

/// Expects: `booking_id`, customer name, `hotel_id`, `room_number`, price, `booking_date`.
fn row_to_booking_record(row: &Row<'_>) -> rusqlite::Result<BookingRecord> {
    Ok(BookingRecord {
        booking_id: row.get(0)?,
        customer_name: row.get(1)?,
        hotel_id: row.get(2)?,
        room_number: row.get(3)?,
        price: row.get(4)?,
        booking_date: row.get(5)?,
    })
}

fn row_to_repair_record(row: &Row<'_>) -> rusqlite::Result<RepairRecord> {
    Ok(RepairRecord {
        request_id: row.get(0)?,
        repair: RoomRepair {
            id: row.get(1)?,
            company_id: row.get(2)?,
            hotel_id: row.get(3)?,
            room_number: row.get(4)?,
            repair_date: row.get(5)?,
        },
    })
}

impl Database {
    /// Most recent bookings of a customer, newest booking date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent_bookings(
        conn: &Connection,
        customer: UserId,
        limit: u32,
    ) -> Result<Vec<BookingRecord>> {
        let mut stmt = conn.prepare(SELECT_RECENT_BOOKINGS)?;
        let records = stmt
            .query_map(params![customer, limit], row_to_booking_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// Most recent room updates, newest first.
    ///
    /// With `Some(manager)` only updates of hotels that manager administers
    /// are listed; `None` lists updates of every hotel.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent_room_updates(
        conn: &Connection,
        managed_by: Option<UserId>,
        limit: u32,
    ) -> Result<Vec<RoomUpdateLog>> {
        let logs = if let Some(manager) = managed_by {
            let mut stmt = conn.prepare(SELECT_RECENT_UPDATES_MANAGED)?;
            let rows = stmt.query_map(params![manager, limit], row_to_update_log)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        } else {
            let mut stmt = conn.prepare(SELECT_RECENT_UPDATES_ALL)?;
            let rows = stmt.query_map([limit], row_to_update_log)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(logs)
    }

    /// Bookings of every hotel a manager administers, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn booking_history(
        conn: &Connection,
        manager: UserId,
        range: Option<DateRange>,
    ) -> Result<Vec<BookingRecord>> {
        let start = range.map(|r| r.start());
        let end = range.map(|r| r.end());
        let mut stmt = conn.prepare(SELECT_BOOKING_HISTORY)?;
        let records = stmt
            .query_map(params![manager, start, end], row_to_booking_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// Customers with the most bookings at a hotel.
    ///
    /// Ordered by booking count descending, then name ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn regular_customers(
        conn: &Connection,
        hotel: HotelId,
        limit: u32,
    ) -> Result<Vec<RegularCustomer>> {
        let mut stmt = conn.prepare(SELECT_REGULAR_CUSTOMERS)?;
        let customers = stmt
            .query_map(params![hotel, limit], |row| {
                Ok(RegularCustomer {
                    customer_id: row.get(0)?,
                    name: row.get(1)?,
                    booking_count: u64::try_from(row.get::<_, i64>(2)?).unwrap_or_default(),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(customers)
    }

    /// Repairs requested by a manager, newest repair date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn repair_history(conn: &Connection, manager: UserId) -> Result<Vec<RepairRecord>> {
        let mut stmt = conn.prepare(SELECT_REPAIR_HISTORY)?;
        let records = stmt
            .query_map([manager], row_to_repair_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }
}
