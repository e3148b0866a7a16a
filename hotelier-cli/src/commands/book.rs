//! Customer booking commands.

use crate::error::CliError;
use crate::utils::{
    authenticate, load_configuration, open_database, parse_date, AuthArgs, GlobalOptions,
};
use clap::Args;
use hotelier::gate::DatabaseGate;
use hotelier::{BookingDate, BookingManager, BookingOutcome, HotelId, QueryService, RoomNumber};

/// Book a room for a single date.
#[derive(Args)]
pub struct BookCommand {
    #[command(flatten)]
    pub auth: AuthArgs,

    /// Hotel id
    #[arg(long, value_name = "ID")]
    pub hotel: HotelId,

    /// Room number
    #[arg(long, value_name = "NUMBER")]
    pub room: RoomNumber,

    /// Date (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long, value_parser = parse_date)]
    pub date: BookingDate,
}

impl BookCommand {
    /// Execute the book command.
    ///
    /// A room that is already taken is a rejection (exit code 1).
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let gate = DatabaseGate::new();
        let customer = authenticate(&db, &gate, &self.auth)?;

        let outcome = BookingManager::new(&mut db, &gate)
            .book_room(customer, self.hotel, self.room, self.date)?;

        match outcome {
            BookingOutcome::Booked(id) => {
                println!(
                    "Booked room {} of hotel {} on {} (booking {id})",
                    self.room, self.hotel, self.date
                );
                Ok(())
            }
            BookingOutcome::Unavailable => Err(CliError::Rejected(format!(
                "Room {} of hotel {} is not available on {}",
                self.room, self.hotel, self.date
            ))),
        }
    }
}

/// Show your most recent bookings, newest date first.
#[derive(Args)]
pub struct BookingsCommand {
    #[command(flatten)]
    pub auth: AuthArgs,

    /// Number of bookings to show (defaults to the configured limit)
    #[arg(long)]
    pub limit: Option<u32>,
}

impl BookingsCommand {
    /// Execute the bookings command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let limit = self.limit.unwrap_or_else(|| config.recent_limit());
        let db = open_database(global, &config)?;
        let gate = DatabaseGate::new();
        let customer = authenticate(&db, &gate, &self.auth)?;

        let records = QueryService::new(&db, &gate).recent_bookings(customer, limit)?;
        if records.is_empty() && !global.quiet {
            println!("No bookings");
        }
        for record in records {
            println!(
                "{}\t{}\thotel {} room {}\t{}",
                record.booking_id,
                record.booking_date,
                record.hotel_id,
                record.room_number,
                record.price
            );
        }
        Ok(())
    }
}
