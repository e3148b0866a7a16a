//! Row types stored in and read from the database.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::{
    BookingDate, BookingId, CompanyId, HotelId, Price, RepairId, RequestId, Role, RoomNumber,
    UpdateId, UserId,
};
use crate::geo::GeoPoint;

/// A registered user.
///
/// The credential hash is a PHC string and is never rendered by `Display`
/// or logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Generated user id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Salted credential hash.
    pub credential_hash: String,
    /// Role the user acts in.
    pub role: Role,
}

/// A hotel and its location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Hotel id.
    pub id: HotelId,
    /// The manager administering this hotel.
    pub manager_id: UserId,
    /// Hotel name.
    pub name: String,
    /// Latitude in coordinate degrees.
    pub latitude: f64,
    /// Longitude in coordinate degrees.
    pub longitude: f64,
}

impl Hotel {
    /// Returns the hotel location.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        GeoPoint::new_unchecked(self.latitude, self.longitude)
    }
}

/// Data needed to insert a hotel.
///
/// The id is generated by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHotel {
    /// The manager administering the hotel.
    pub manager_id: UserId,
    /// Hotel name.
    pub name: String,
    /// Location of the hotel.
    pub location: GeoPoint,
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Hotel the room belongs to.
    pub hotel_id: HotelId,
    /// Room number within the hotel.
    pub room_number: RoomNumber,
    /// Nightly price.
    pub price: Price,
    /// Link to a picture of the room.
    pub image_url: String,
}

/// A booking of a room for a single date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomBooking {
    /// Generated booking id.
    pub id: BookingId,
    /// The booking customer.
    pub customer_id: UserId,
    /// Booked hotel.
    pub hotel_id: HotelId,
    /// Booked room.
    pub room_number: RoomNumber,
    /// Booked date.
    pub booking_date: BookingDate,
}

/// Audit entry written whenever a manager updates a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomUpdateLog {
    /// Generated update id.
    pub id: UpdateId,
    /// The manager who performed the update.
    pub manager_id: UserId,
    /// Updated hotel.
    pub hotel_id: HotelId,
    /// Updated room.
    pub room_number: RoomNumber,
    /// When the update was committed.
    pub updated_on: SystemTime,
}

/// A repair scheduled with a maintenance company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRepair {
    /// Generated repair id.
    pub id: RepairId,
    /// Company performing the repair.
    pub company_id: CompanyId,
    /// Hotel of the room.
    pub hotel_id: HotelId,
    /// Room to repair.
    pub room_number: RoomNumber,
    /// Scheduled repair date.
    pub repair_date: BookingDate,
}

/// A booking joined with its customer name and room price.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    /// Booking id.
    pub booking_id: BookingId,
    /// Name of the booking customer.
    pub customer_name: String,
    /// Booked hotel.
    pub hotel_id: HotelId,
    /// Booked room.
    pub room_number: RoomNumber,
    /// Current price of the room.
    pub price: Price,
    /// Booked date.
    pub booking_date: BookingDate,
}

/// A customer and how many times they booked a hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularCustomer {
    /// Customer id.
    pub customer_id: UserId,
    /// Customer name.
    pub name: String,
    /// Number of bookings at the hotel.
    pub booking_count: u64,
}

/// A repair requested by a manager, joined with its request id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairRecord {
    /// Repair request id.
    pub request_id: RequestId,
    /// The repair.
    pub repair: RoomRepair,
}
