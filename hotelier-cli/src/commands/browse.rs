//! Browsing commands: nearby hotels and free rooms.
//!
//! Neither needs an account.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_date, GlobalOptions};
use clap::Args;
use hotelier::gate::DatabaseGate;
use hotelier::{BookingDate, GeoPoint, HotelId, QueryService};

/// List hotels near a location, nearest first.
#[derive(Args)]
pub struct HotelsCommand {
    /// Your latitude
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Your longitude
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Search radius (defaults to the configured radius)
    #[arg(long)]
    pub radius: Option<f64>,
}

impl HotelsCommand {
    /// Execute the hotels command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let origin = GeoPoint::new(self.lat, self.lon)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let config = load_configuration(global)?;
        let radius = self.radius.unwrap_or_else(|| config.search_radius());
        let db = open_database(global, &config)?;

        let gate = DatabaseGate::new();
        let hotels = QueryService::new(&db, &gate).hotels_nearby(origin, radius)?;

        if hotels.is_empty() && !global.quiet {
            println!("No hotels within {radius} of {origin}");
        }
        for hotel in hotels {
            println!(
                "{}\t{}\t{}\tdistance {:.2}",
                hotel.id,
                hotel.name,
                hotel.location(),
                origin.distance_to(hotel.location())
            );
        }
        Ok(())
    }
}

/// List rooms of a hotel that are free on a date.
#[derive(Args)]
pub struct RoomsCommand {
    /// Hotel id
    #[arg(long, value_name = "ID")]
    pub hotel: HotelId,

    /// Date (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long, value_parser = parse_date)]
    pub date: BookingDate,
}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let gate = DatabaseGate::new();
        let rooms = QueryService::new(&db, &gate).available_rooms(self.hotel, self.date)?;

        if rooms.is_empty() && !global.quiet {
            println!("No rooms of hotel {} are free on {}", self.hotel, self.date);
        }
        for room in rooms {
            println!("{}\t{}\t{}", room.room_number, room.price, room.image_url);
        }
        Ok(())
    }
}
